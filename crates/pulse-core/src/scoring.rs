use crate::dosha::Dosha;
use crate::error::ClassifyError;
use crate::observation::{PulseObservation, Rhythm, StressLevel, Strength, Temperature};
use std::ops::AddAssign;
use tracing::warn;

/// Rates strictly below this many BPM lean Kapha.
pub const SLOW_PULSE_BELOW: u32 = 60;
/// Rates strictly above this many BPM lean Pitta.
pub const FAST_PULSE_ABOVE: u32 = 90;

/// Signed per-dosha accumulators. Also used for the fixed per-bucket weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoshaScoreVector {
    pub vata: i32,
    pub pitta: i32,
    pub kapha: i32,
}

impl DoshaScoreVector {
    pub const fn new(vata: i32, pitta: i32, kapha: i32) -> Self {
        Self { vata, pitta, kapha }
    }

    pub fn get(&self, dosha: Dosha) -> i32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Sums the five factor contributions for one observation.
    pub fn from_observation(obs: &PulseObservation) -> Self {
        let mut scores = Self::default();
        scores += pulse_rate_weights(obs.pulse_rate);
        scores += rhythm_weights(obs.rhythm);
        scores += strength_weights(obs.strength);
        scores += temperature_weights(obs.temperature);
        scores += stress_weights(obs.stress_level);
        scores
    }

    /// Sum of absolute accumulator values.
    pub fn total_magnitude(&self) -> u32 {
        self.vata.unsigned_abs() + self.pitta.unsigned_abs() + self.kapha.unsigned_abs()
    }

    /// Each dosha's share of the total magnitude in percent, floored at zero.
    pub fn normalize(&self) -> Result<NormalizedScores, ClassifyError> {
        let total = self.total_magnitude();
        if total == 0 {
            warn!(scores = ?self, "dosha scores net to zero");
            return Err(ClassifyError::DegenerateScores);
        }
        let total = f64::from(total);
        let share = |score: i32| (f64::from(score) / total * 100.0).max(0.0);
        Ok(NormalizedScores {
            vata: share(self.vata),
            pitta: share(self.pitta),
            kapha: share(self.kapha),
        })
    }
}

impl AddAssign for DoshaScoreVector {
    fn add_assign(&mut self, rhs: Self) {
        self.vata += rhs.vata;
        self.pitta += rhs.pitta;
        self.kapha += rhs.kapha;
    }
}

pub fn pulse_rate_weights(pulse_rate: u32) -> DoshaScoreVector {
    if pulse_rate < SLOW_PULSE_BELOW {
        DoshaScoreVector::new(-10, 0, 30)
    } else if pulse_rate > FAST_PULSE_ABOVE {
        DoshaScoreVector::new(0, 35, 0)
    } else {
        DoshaScoreVector::new(20, 10, 10)
    }
}

pub fn rhythm_weights(rhythm: Rhythm) -> DoshaScoreVector {
    match rhythm {
        Rhythm::Irregular => DoshaScoreVector::new(40, 0, 0),
        Rhythm::Regular => DoshaScoreVector::new(0, 10, 20),
    }
}

pub fn strength_weights(strength: Strength) -> DoshaScoreVector {
    match strength {
        Strength::Weak => DoshaScoreVector::new(20, 0, 25),
        Strength::Strong => DoshaScoreVector::new(0, 35, 0),
        Strength::Normal => DoshaScoreVector::new(15, 15, 15),
    }
}

pub fn temperature_weights(temperature: Temperature) -> DoshaScoreVector {
    match temperature {
        Temperature::Cool => DoshaScoreVector::new(15, 0, 25),
        Temperature::Warm => DoshaScoreVector::new(0, 40, 0),
        Temperature::Normal => DoshaScoreVector::new(20, 10, 0),
    }
}

pub fn stress_weights(stress_level: StressLevel) -> DoshaScoreVector {
    match stress_level {
        StressLevel::High => DoshaScoreVector::new(20, 20, 0),
        StressLevel::Low => DoshaScoreVector::new(0, 0, 15),
        StressLevel::Medium => DoshaScoreVector::new(10, 0, 0),
    }
}

/// Percent shares in `[0, 100]` per dosha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedScores {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl NormalizedScores {
    pub fn get(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Highest share, scanning Vata, Pitta, Kapha. A later dosha only
    /// takes over on a strictly greater share.
    pub fn dominant(&self) -> (Dosha, f64) {
        let mut best = (Dosha::Vata, self.vata);
        for dosha in [Dosha::Pitta, Dosha::Kapha] {
            let share = self.get(dosha);
            if share > best.1 {
                best = (dosha, share);
            }
        }
        best
    }
}
