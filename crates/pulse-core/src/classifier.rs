use crate::dosha::Dosha;
use crate::error::ClassifyError;
use crate::observation::PulseObservation;
use crate::risk::{RiskFactors, RiskLevel};
use crate::scoring::DoshaScoreVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one classification, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub dosha: Dosha,
    /// Dominant dosha's rounded share of the total score mass, in `[0, 100]`.
    pub dosha_percentage: u8,
    pub risk_level: RiskLevel,
    pub health_tendencies: Vec<String>,
    pub suggestions: Vec<String>,
    pub explanation: String,
}

/// Maps one observation to its dominant dosha, confidence and risk tier.
///
/// Performs no range validation. The only error is a score vector whose
/// magnitudes sum to zero, which no combination of the closed input
/// enums produces.
pub fn classify(observation: &PulseObservation) -> Result<AnalysisResult, ClassifyError> {
    let scores = DoshaScoreVector::from_observation(observation);
    let normalized = scores.normalize()?;
    let (dosha, share) = normalized.dominant();
    let dosha_percentage = share.round().clamp(0.0, 100.0) as u8;

    let factors = RiskFactors::from_observation(observation);
    let risk_level = factors.level();

    debug!(
        pulse_rate = observation.pulse_rate,
        vata = scores.vata,
        pitta = scores.pitta,
        kapha = scores.kapha,
        %dosha,
        dosha_percentage,
        risk_factors = factors.count(),
        %risk_level,
        "pulse classified"
    );

    let guidance = dosha.guidance();
    Ok(AnalysisResult {
        dosha,
        dosha_percentage,
        risk_level,
        health_tendencies: guidance.health_tendencies.iter().map(|s| s.to_string()).collect(),
        suggestions: guidance.suggestions.iter().map(|s| s.to_string()).collect(),
        explanation: guidance.explanation.to_string(),
    })
}

/// Classifies raw form fields, parsing the categorical strings first.
pub fn classify_fields(
    pulse_rate: u32,
    rhythm: &str,
    strength: &str,
    temperature: &str,
    stress_level: &str,
) -> Result<AnalysisResult, ClassifyError> {
    let observation =
        PulseObservation::from_fields(pulse_rate, rhythm, strength, temperature, stress_level)?;
    classify(&observation)
}
