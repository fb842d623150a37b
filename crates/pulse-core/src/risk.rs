use crate::observation::{PulseObservation, Rhythm, StressLevel, Temperature};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this rate (BPM) the pulse counts as a risk factor.
pub const RISK_RATE_FLOOR: u32 = 50;
/// Above this rate (BPM) the pulse counts as a risk factor.
pub const RISK_RATE_CEILING: u32 = 100;

/// Qualitative risk tier. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_factor_count(count: usize) -> Self {
        match count {
            0 | 1 => RiskLevel::Low,
            2 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The four binary indicators that feed the risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    pub high_stress: bool,
    pub abnormal_rate: bool,
    pub irregular_rhythm: bool,
    pub warm_temperature: bool,
}

impl RiskFactors {
    pub fn from_observation(obs: &PulseObservation) -> Self {
        Self {
            high_stress: obs.stress_level == StressLevel::High,
            abnormal_rate: obs.pulse_rate > RISK_RATE_CEILING || obs.pulse_rate < RISK_RATE_FLOOR,
            irregular_rhythm: obs.rhythm == Rhythm::Irregular,
            warm_temperature: obs.temperature == Temperature::Warm,
        }
    }

    pub fn count(&self) -> usize {
        [
            self.high_stress,
            self.abnormal_rate,
            self.irregular_rhythm,
            self.warm_temperature,
        ]
        .into_iter()
        .filter(|triggered| *triggered)
        .count()
    }

    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_factor_count(self.count())
    }
}
