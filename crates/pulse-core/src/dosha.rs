use crate::error::ObservationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constitutional category reported by the classifier.
///
/// Declaration order is the evaluation order used to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(ObservationError::EmptyField("dosha"));
        }
        Dosha::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ObservationError::UnknownValue {
                field: "dosha",
                value: value.to_string(),
            })
    }
}
