//! `pulse-analyze`: classify self-reported pulse readings into a dominant
//! dosha, confidence and risk tier, and export the analysis report.
//! Educational prototype only; not a medical diagnostic tool.

mod cli;
mod commands;
mod config;
mod logging;
#[cfg(test)]
mod tests;

use anyhow::Result;
use config::CliConfig;
use pulse_metrics::ClassifierMetrics;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.log_format = format.parse()?;
    }
    logging::init(&config.log_level, config.log_format)?;

    let metrics = ClassifierMetrics::new()?;
    let outcome = commands::dispatch(&matches, &config, &metrics);
    if config.emit_metrics {
        print!("{}", metrics.render()?);
    }
    outcome
}
