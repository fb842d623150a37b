use anyhow::{bail, Context, Result};
use pulse_core::{PULSE_RATE_MAX, PULSE_RATE_MIN};
use pulse_report::{DEFAULT_PULSE_RATE, DEFAULT_REPORT_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format {other:?}, expected plain or json"),
        }
    }
}

/// Settings read from `--config`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub report_dir: PathBuf,
    pub report_file_name: String,
    pub default_pulse_rate: u32,
    pub emit_metrics: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_format: LogFormat::Plain,
            report_dir: PathBuf::from("."),
            report_file_name: DEFAULT_REPORT_FILE_NAME.into(),
            default_pulse_rate: DEFAULT_PULSE_RATE,
            emit_metrics: false,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: CliConfig = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config JSON in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(PULSE_RATE_MIN..=PULSE_RATE_MAX).contains(&self.default_pulse_rate) {
            bail!(
                "default_pulse_rate={} is outside {}..={}",
                self.default_pulse_rate,
                PULSE_RATE_MIN,
                PULSE_RATE_MAX
            );
        }
        if self.report_file_name.trim().is_empty() {
            bail!("report_file_name must not be empty");
        }
        Ok(())
    }
}
