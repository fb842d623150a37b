use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use pulse_core::{
    classify, AnalysisResult, ClassifyError, Dosha, DoshaDistribution, ObservationError,
    PulseObservation,
};
use pulse_metrics::ClassifierMetrics;
use pulse_report::{parse_query, PulseReport, QueryError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Output options shared by `analyze` and `query`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub json: bool,
    pub write_report: bool,
    pub report_dir: Option<PathBuf>,
}

impl RunOptions {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            write_report: m.get_flag("report"),
            report_dir: m.get_one::<PathBuf>("report-dir").cloned(),
        }
    }
}

pub fn dispatch(matches: &ArgMatches, config: &CliConfig, metrics: &ClassifierMetrics) -> Result<()> {
    match matches.subcommand() {
        Some(("analyze", m)) => {
            let field = |name: &str| m.get_one::<String>(name).map(String::as_str).unwrap_or_default();
            let pulse_rate = *m
                .get_one::<u32>("pulse-rate")
                .context("--pulse-rate is required")?;
            let observation = PulseObservation::from_fields(
                pulse_rate,
                field("rhythm"),
                field("strength"),
                field("temperature"),
                field("stress-level"),
            )
            .and_then(PulseObservation::validated);
            let observation = accept(observation, metrics)?;
            run_observation(observation, &RunOptions::from_matches(m), config, metrics)?;
            Ok(())
        }
        Some(("query", m)) => {
            let query = m.get_one::<String>("query").map(String::as_str).unwrap_or_default();
            let observation = match parse_query(query, config.default_pulse_rate) {
                Ok(observation) => observation,
                Err(QueryError::Observation(err)) => accept(Err(err), metrics)?,
                Err(err) => return Err(err).context("could not decode query string"),
            };
            run_observation(observation, &RunOptions::from_matches(m), config, metrics)?;
            Ok(())
        }
        Some(("batch", m)) => {
            let path = m
                .get_one::<PathBuf>("file")
                .context("batch requires an input file")?;
            run_batch(path, m.get_flag("json"), metrics)?;
            Ok(())
        }
        Some(("profile", m)) => {
            let dosha: Dosha = m
                .get_one::<String>("dosha")
                .map(String::as_str)
                .unwrap_or_default()
                .parse()?;
            print_profile(dosha);
            Ok(())
        }
        Some((other, _)) => bail!("unknown subcommand {other:?}"),
        None => bail!("a subcommand is required"),
    }
}

/// Records a rejected observation before handing the error to the caller.
fn accept(
    observation: Result<PulseObservation, ObservationError>,
    metrics: &ClassifierMetrics,
) -> Result<PulseObservation> {
    observation.map_err(|err| {
        let err = ClassifyError::from(err);
        metrics.observe_rejection(&err);
        warn!(error = %err, "observation rejected");
        anyhow::Error::new(err).context("invalid pulse observation")
    })
}

fn classify_observed(observation: &PulseObservation, metrics: &ClassifierMetrics) -> Result<AnalysisResult> {
    match classify(observation) {
        Ok(result) => {
            metrics.observe(&result);
            Ok(result)
        }
        Err(err) => {
            metrics.observe_rejection(&err);
            Err(err).context("classification failed")
        }
    }
}

/// Classifies one observation, prints it and optionally writes the report file.
pub fn run_observation(
    observation: PulseObservation,
    opts: &RunOptions,
    config: &CliConfig,
    metrics: &ClassifierMetrics,
) -> Result<PulseReport> {
    let result = classify_observed(&observation, metrics)?;
    let report = PulseReport::new(observation, result);

    if opts.json {
        println!("{}", report.to_json()?);
    } else {
        print_summary(&report);
    }

    if opts.write_report {
        let dir = opts.report_dir.as_deref().unwrap_or(config.report_dir.as_path());
        let path = report.write_to(dir, &config.report_file_name)?;
        if !opts.json {
            println!("Report written to {}", path.display());
        }
    }
    Ok(report)
}

#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub results: Vec<AnalysisResult>,
    pub distribution: DoshaDistribution,
    pub dominant: Option<Dosha>,
}

pub fn load_batch(path: &Path) -> Result<Vec<PulseObservation>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("batch file {} is not a JSON array of observations", path.display()))
}

pub fn summarize_batch(
    observations: &[PulseObservation],
    metrics: &ClassifierMetrics,
) -> Result<BatchSummary> {
    let mut results = Vec::with_capacity(observations.len());
    for (idx, observation) in observations.iter().enumerate() {
        let observation = accept(observation.validated(), metrics)
            .with_context(|| format!("reading #{} is invalid", idx + 1))?;
        results.push(classify_observed(&observation, metrics)?);
    }
    let distribution = DoshaDistribution::from_results(&results);
    info!(readings = results.len(), "batch classified");
    Ok(BatchSummary {
        dominant: distribution.dominant(),
        results,
        distribution,
    })
}

fn run_batch(path: &Path, json: bool, metrics: &ClassifierMetrics) -> Result<()> {
    let observations = load_batch(path)?;
    let summary = summarize_batch(&observations, metrics)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for (idx, (observation, result)) in observations.iter().zip(&summary.results).enumerate() {
        println!(
            "#{:<3} {:>3} BPM  {:<5} {:>3}%  risk {}",
            idx + 1,
            observation.pulse_rate,
            result.dosha,
            result.dosha_percentage,
            result.risk_level
        );
    }
    println!();
    println!("Dosha distribution over {} readings:", summary.distribution.total());
    for dosha in Dosha::ALL {
        println!(
            "  {:<5} {:>3}  ({}%)",
            dosha,
            summary.distribution.count(dosha),
            summary.distribution.share(dosha)
        );
    }
    if let Some(dominant) = summary.dominant {
        println!("Overall dominant dosha: {dominant}");
    }
    Ok(())
}

fn print_summary(report: &PulseReport) {
    let obs = &report.observation;
    let result = &report.result;
    println!("Dominant dosha:    {} ({}% confidence)", result.dosha, result.dosha_percentage);
    println!("Health risk level: {}", result.risk_level);
    println!(
        "Inputs:            {} BPM, {} rhythm, {} strength, {} temperature, {} stress",
        obs.pulse_rate,
        obs.rhythm.label(),
        obs.strength.label(),
        obs.temperature.label(),
        obs.stress_level.label()
    );
    println!();
    println!("{}", result.explanation);
    println!();
    println!("Possible health tendencies:");
    for tendency in &result.health_tendencies {
        println!("  - {tendency}");
    }
    println!("Lifestyle suggestions:");
    for (idx, suggestion) in result.suggestions.iter().enumerate() {
        println!("  {}. {}", idx + 1, suggestion);
    }
}

fn print_profile(dosha: Dosha) {
    let profile = dosha.profile();
    println!("{} profile", profile.dosha);
    println!("{}", profile.description);
    println!("Traits: {}", profile.traits.join(", "));
}
