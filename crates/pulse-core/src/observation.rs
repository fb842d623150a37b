use crate::error::ObservationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PULSE_RATE_MIN: u32 = 40;
pub const PULSE_RATE_MAX: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Rhythm {
    Regular,
    Irregular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Strength {
    Weak,
    Normal,
    Strong,
}

/// How warm the body feels to the person taking the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Temperature {
    Cool,
    Normal,
    Warm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl Rhythm {
    pub const ALL: [Rhythm; 2] = [Rhythm::Regular, Rhythm::Irregular];

    pub fn as_str(self) -> &'static str {
        match self {
            Rhythm::Regular => "regular",
            Rhythm::Irregular => "irregular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rhythm::Regular => "Regular",
            Rhythm::Irregular => "Irregular",
        }
    }
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Weak, Strength::Normal, Strength::Strong];

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Normal => "normal",
            Strength::Strong => "strong",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Normal => "Normal",
            Strength::Strong => "Strong",
        }
    }
}

impl Temperature {
    pub const ALL: [Temperature; 3] = [Temperature::Cool, Temperature::Normal, Temperature::Warm];

    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Cool => "cool",
            Temperature::Normal => "normal",
            Temperature::Warm => "warm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Temperature::Cool => "Cool",
            Temperature::Normal => "Normal",
            Temperature::Warm => "Warm",
        }
    }
}

impl StressLevel {
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Medium, StressLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Medium => "medium",
            StressLevel::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

/// Lowercases and trims a raw categorical field, rejecting empty input.
fn normalize_field(field: &'static str, raw: &str) -> Result<String, ObservationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ObservationError::EmptyField(field));
    }
    Ok(value.to_ascii_lowercase())
}

fn unknown(field: &'static str, raw: &str) -> ObservationError {
    ObservationError::UnknownValue {
        field,
        value: raw.trim().to_string(),
    }
}

impl FromStr for Rhythm {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_field("rhythm", s)?.as_str() {
            "regular" => Ok(Rhythm::Regular),
            "irregular" => Ok(Rhythm::Irregular),
            _ => Err(unknown("rhythm", s)),
        }
    }
}

impl FromStr for Strength {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_field("strength", s)?.as_str() {
            "weak" => Ok(Strength::Weak),
            "normal" => Ok(Strength::Normal),
            "strong" => Ok(Strength::Strong),
            _ => Err(unknown("strength", s)),
        }
    }
}

impl FromStr for Temperature {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_field("temperature", s)?.as_str() {
            "cool" => Ok(Temperature::Cool),
            "normal" => Ok(Temperature::Normal),
            "warm" => Ok(Temperature::Warm),
            _ => Err(unknown("temperature", s)),
        }
    }
}

impl FromStr for StressLevel {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_field("stressLevel", s)?.as_str() {
            "low" => Ok(StressLevel::Low),
            "medium" => Ok(StressLevel::Medium),
            "high" => Ok(StressLevel::High),
            _ => Err(unknown("stressLevel", s)),
        }
    }
}

impl fmt::Display for Rhythm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// Deserialization goes through `FromStr`, so JSON input is as lenient as flags
// and query strings.
impl TryFrom<String> for Rhythm {
    type Error = ObservationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Strength {
    type Error = ObservationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Temperature {
    type Error = ObservationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for StressLevel {
    type Error = ObservationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One self-reported pulse reading, as collected by the assessment form.
///
/// The classifier accepts any value here; range checks live in
/// [`PulseObservation::validate`] and are the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseObservation {
    pub pulse_rate: u32,
    pub rhythm: Rhythm,
    pub strength: Strength,
    pub temperature: Temperature,
    pub stress_level: StressLevel,
}

impl PulseObservation {
    pub fn new(
        pulse_rate: u32,
        rhythm: Rhythm,
        strength: Strength,
        temperature: Temperature,
        stress_level: StressLevel,
    ) -> Self {
        Self {
            pulse_rate,
            rhythm,
            strength,
            temperature,
            stress_level,
        }
    }

    /// Builds an observation from raw form strings.
    pub fn from_fields(
        pulse_rate: u32,
        rhythm: &str,
        strength: &str,
        temperature: &str,
        stress_level: &str,
    ) -> Result<Self, ObservationError> {
        Ok(Self {
            pulse_rate,
            rhythm: rhythm.parse()?,
            strength: strength.parse()?,
            temperature: temperature.parse()?,
            stress_level: stress_level.parse()?,
        })
    }

    pub fn validate(&self) -> Result<(), ObservationError> {
        if !(PULSE_RATE_MIN..=PULSE_RATE_MAX).contains(&self.pulse_rate) {
            return Err(ObservationError::PulseRateOutOfRange(self.pulse_rate));
        }
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ObservationError> {
        self.validate()?;
        Ok(self)
    }
}

/// Parses a pulse rate as typed into a form field.
pub fn parse_pulse_rate(raw: &str) -> Result<u32, ObservationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ObservationError::EmptyField("pulseRate"));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ObservationError::InvalidPulseRate(trimmed.to_string()))
}
