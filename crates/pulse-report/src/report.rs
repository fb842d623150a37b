use crate::error::ReportError;
use chrono::{DateTime, Utc};
use pulse_core::{AnalysisResult, PulseObservation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_REPORT_FILE_NAME: &str = "pulse-analysis-report.txt";

const REPORT_TITLE: &str = "PULSE-BASED DISEASE PREDICTION SYSTEM - ANALYSIS REPORT";
const DISCLAIMER: &str = "This is an educational prototype and NOT a medical diagnostic tool.\n\
Always consult qualified healthcare professionals for medical advice.";

/// A classification result bundled with its inputs for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub observation: PulseObservation,
    pub result: AnalysisResult,
}

impl PulseReport {
    pub fn new(observation: PulseObservation, result: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            observation,
            result,
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the plain-text report into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf, ReportError> {
        let path = dir.join(file_name);
        let io_err = |source| ReportError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(io_err)?;
        fs::write(&path, self.render_text()).map_err(io_err)?;
        info!(report_id = %self.id, path = %path.display(), "report written");
        Ok(path)
    }
}

impl fmt::Display for PulseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = &self.observation;
        let result = &self.result;

        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f)?;
        writeln!(f, "MEDICAL DISCLAIMER:")?;
        writeln!(f, "{DISCLAIMER}")?;
        writeln!(f)?;
        writeln!(f, "ANALYSIS RESULTS:")?;
        writeln!(f, "- Dominant Dosha: {}", result.dosha)?;
        writeln!(f, "- Confidence Level: {}%", result.dosha_percentage)?;
        writeln!(f, "- Health Risk Level: {}", result.risk_level)?;
        writeln!(f)?;
        writeln!(f, "INPUT MEASUREMENTS:")?;
        writeln!(f, "- Pulse Rate: {} BPM", obs.pulse_rate)?;
        writeln!(f, "- Pulse Rhythm: {}", obs.rhythm.label())?;
        writeln!(f, "- Pulse Strength: {}", obs.strength.label())?;
        writeln!(f, "- Body Temperature: {}", obs.temperature.label())?;
        writeln!(f, "- Stress Level: {}", obs.stress_level.label())?;
        writeln!(f)?;
        writeln!(f, "DOSHA PROFILE:")?;
        writeln!(f, "{}", result.explanation)?;
        writeln!(f)?;
        writeln!(f, "POSSIBLE HEALTH TENDENCIES:")?;
        for tendency in &result.health_tendencies {
            writeln!(f, "- {tendency}")?;
        }
        writeln!(f)?;
        writeln!(f, "LIFESTYLE SUGGESTIONS:")?;
        for (idx, suggestion) in result.suggestions.iter().enumerate() {
            writeln!(f, "{}. {}", idx + 1, suggestion)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Report ID: {}", self.id)
    }
}
