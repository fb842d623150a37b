use crate::cli;
use crate::commands::{dispatch, load_batch, run_observation, summarize_batch, RunOptions};
use crate::config::{CliConfig, LogFormat};
use pulse_core::{Dosha, PulseObservation, RiskLevel, Rhythm, StressLevel, Strength, Temperature};
use pulse_metrics::ClassifierMetrics;
use std::fs;

#[test]
fn command_definition_is_consistent() {
    cli::build().debug_assert();
}

#[test]
fn analyze_requires_every_field() {
    let missing = cli::build().try_get_matches_from([
        "pulse-analyze",
        "analyze",
        "--pulse-rate",
        "72",
        "--rhythm",
        "regular",
    ]);
    assert!(missing.is_err());

    let full = cli::build()
        .try_get_matches_from([
            "pulse-analyze",
            "--log-format",
            "json",
            "analyze",
            "--pulse-rate",
            "72",
            "--rhythm",
            "regular",
            "--strength",
            "normal",
            "--temperature",
            "normal",
            "--stress-level",
            "low",
        ])
        .unwrap();
    assert_eq!(full.get_one::<String>("log-format").map(String::as_str), Some("json"));
    let (name, sub) = full.subcommand().unwrap();
    assert_eq!(name, "analyze");
    assert_eq!(sub.get_one::<u32>("pulse-rate"), Some(&72));
}

#[test]
fn categorical_flags_offer_form_choices_in_any_case() {
    let args = |strength: &'static str| {
        [
            "pulse-analyze",
            "analyze",
            "--pulse-rate",
            "64",
            "--rhythm",
            "Irregular",
            "--strength",
            strength,
            "--temperature",
            "WARM",
            "--stress-level",
            "medium",
        ]
    };

    let matches = cli::build().try_get_matches_from(args("Weak")).unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    assert_eq!(sub.get_one::<String>("strength").map(String::as_str), Some("weak"));
    assert_eq!(sub.get_one::<String>("rhythm").map(String::as_str), Some("irregular"));

    let metrics = ClassifierMetrics::new().unwrap();
    assert!(dispatch(&matches, &CliConfig::default(), &metrics).is_ok());
    assert_eq!(
        metrics
            .classifications_total
            .with_label_values(&["Vata", "Medium"])
            .get(),
        1
    );

    let err = cli::build().try_get_matches_from(args("mushy")).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

    let strength = cli::build()
        .find_subcommand("analyze")
        .and_then(|analyze| analyze.get_arguments().find(|a| a.get_id().as_str() == "strength"))
        .map(|arg| (arg.get_value_names().map(<[_]>::to_vec), arg.get_possible_values()))
        .unwrap();
    assert_eq!(strength.0, Some(vec!["STRENGTH".into()]));
    let names: Vec<_> = strength.1.iter().map(|v| v.get_name().to_string()).collect();
    assert_eq!(names, ["weak", "normal", "strong"]);
}

#[test]
fn config_file_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pulse.json");
    fs::write(&path, r#"{"log_format": "json", "default_pulse_rate": 80}"#).unwrap();

    let config = CliConfig::load(&path).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.default_pulse_rate, 80);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.report_file_name, "pulse-analysis-report.txt");
    assert!(!config.emit_metrics);
}

#[test]
fn config_rejects_out_of_range_default_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pulse.json");
    fs::write(&path, r#"{"default_pulse_rate": 200}"#).unwrap();
    assert!(CliConfig::load(&path).is_err());
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn analysis_writes_report_into_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = CliConfig {
        report_dir: dir.path().to_path_buf(),
        report_file_name: "out.txt".into(),
        ..CliConfig::default()
    };
    let metrics = ClassifierMetrics::new().unwrap();
    let observation = PulseObservation::new(
        55,
        Rhythm::Regular,
        Strength::Weak,
        Temperature::Cool,
        StressLevel::Low,
    );
    let opts = RunOptions {
        json: true,
        write_report: true,
        report_dir: None,
    };

    let report = run_observation(observation, &opts, &config, &metrics).unwrap();
    assert_eq!(report.result.dosha, Dosha::Kapha);

    let written = fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(written.contains("- Confidence Level: 77%"));
    assert_eq!(
        metrics
            .classifications_total
            .with_label_values(&["Kapha", "Low"])
            .get(),
        1
    );
}

#[test]
fn batch_summarizes_distribution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    fs::write(
        &path,
        r#"[
            {"pulseRate":95,"rhythm":"irregular","strength":"strong","temperature":"warm","stressLevel":"high"},
            {"pulseRate":55,"rhythm":"regular","strength":"weak","temperature":"cool","stressLevel":"low"},
            {"pulseRate":70,"rhythm":"regular","strength":"normal","temperature":"normal","stressLevel":"low"}
        ]"#,
    )
    .unwrap();

    let metrics = ClassifierMetrics::new().unwrap();
    let observations = load_batch(&path).unwrap();
    let summary = summarize_batch(&observations, &metrics).unwrap();

    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.results[0].risk_level, RiskLevel::High);
    assert_eq!(summary.distribution.count(Dosha::Kapha), 2);
    assert_eq!(summary.distribution.share(Dosha::Pitta), 33);
    assert_eq!(summary.dominant, Some(Dosha::Kapha));
}

#[test]
fn batch_stops_at_first_invalid_reading() {
    let metrics = ClassifierMetrics::new().unwrap();
    let observations = [PulseObservation::new(
        30,
        Rhythm::Regular,
        Strength::Normal,
        Temperature::Normal,
        StressLevel::Low,
    )];
    let err = summarize_batch(&observations, &metrics).unwrap_err();
    assert!(err.to_string().contains("reading #1"));
}

#[test]
fn rejected_query_is_counted() {
    let matches = cli::build()
        .try_get_matches_from([
            "pulse-analyze",
            "query",
            "pulseRate=130&rhythm=regular&strength=normal&temperature=normal&stressLevel=low",
        ])
        .unwrap();
    let metrics = ClassifierMetrics::new().unwrap();

    assert!(dispatch(&matches, &CliConfig::default(), &metrics).is_err());
    assert_eq!(
        metrics
            .rejected_observations_total
            .with_label_values(&["pulse_rate_out_of_range"])
            .get(),
        1
    );
}

#[test]
fn profile_rejects_unknown_dosha() {
    let matches = cli::build()
        .try_get_matches_from(["pulse-analyze", "profile", "ether"])
        .unwrap();
    let metrics = ClassifierMetrics::new().unwrap();
    assert!(dispatch(&matches, &CliConfig::default(), &metrics).is_err());
}
