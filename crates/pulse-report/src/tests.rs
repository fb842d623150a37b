use crate::{parse_query, to_query_string, PulseReport, QueryError, DEFAULT_PULSE_RATE};
use chrono::{TimeZone, Utc};
use pulse_core::{
    classify, ObservationError, PulseObservation, Rhythm, StressLevel, Strength, Temperature,
};
use uuid::Uuid;

fn sample_observation() -> PulseObservation {
    PulseObservation::new(
        95,
        Rhythm::Irregular,
        Strength::Strong,
        Temperature::Warm,
        StressLevel::High,
    )
}

fn sample_report() -> PulseReport {
    let observation = sample_observation();
    let result = classify(&observation).unwrap();
    PulseReport {
        id: Uuid::nil(),
        generated_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
        observation,
        result,
    }
}

#[test]
fn query_string_uses_form_field_names() {
    assert_eq!(
        to_query_string(&sample_observation()),
        "pulseRate=95&rhythm=irregular&strength=strong&temperature=warm&stressLevel=high"
    );
}

#[test]
fn query_string_survives_the_trip_to_the_results_screen() {
    let o = sample_observation();
    let parsed = parse_query(&format!("?{}", to_query_string(&o)), DEFAULT_PULSE_RATE).unwrap();
    assert_eq!(parsed, o);
}

#[test]
fn missing_pulse_rate_defaults_to_seventy_two() {
    let parsed = parse_query(
        "rhythm=regular&strength=normal&temperature=cool&stressLevel=low&utm_source=x",
        DEFAULT_PULSE_RATE,
    )
    .unwrap();
    assert_eq!(parsed.pulse_rate, 72);

    let parsed = parse_query(
        "pulseRate=&rhythm=regular&strength=normal&temperature=cool&stressLevel=low",
        60,
    )
    .unwrap();
    assert_eq!(parsed.pulse_rate, 60);
}

#[test]
fn percent_and_plus_encoding_is_decoded() {
    let parsed = parse_query(
        "pulseRate=%2080&rhythm=Regular+&strength=%77eak&temperature=normal&stressLevel=medium",
        DEFAULT_PULSE_RATE,
    )
    .unwrap();
    assert_eq!(parsed.pulse_rate, 80);
    assert_eq!(parsed.strength, Strength::Weak);

    assert!(matches!(
        parse_query("rhythm=%FF%FE", DEFAULT_PULSE_RATE),
        Err(QueryError::BadEncoding(_))
    ));
}

#[test]
fn repeated_keys_keep_the_first_value() {
    let parsed = parse_query(
        "rhythm=irregular&strength=normal&temperature=normal&stressLevel=low&rhythm=regular&pulseRate=50&pulseRate=110",
        DEFAULT_PULSE_RATE,
    )
    .unwrap();
    assert_eq!(parsed.rhythm, Rhythm::Irregular);
    assert_eq!(parsed.pulse_rate, 50);
}

#[test]
fn incomplete_or_out_of_range_queries_are_rejected() {
    let err = parse_query("pulseRate=80&rhythm=regular", DEFAULT_PULSE_RATE).unwrap_err();
    assert!(matches!(
        err,
        QueryError::Observation(ObservationError::EmptyField("strength"))
    ));

    let err = parse_query(
        "pulseRate=150&rhythm=regular&strength=normal&temperature=cool&stressLevel=low",
        DEFAULT_PULSE_RATE,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Observation(ObservationError::PulseRateOutOfRange(150))
    ));
}

#[test]
fn report_text_carries_every_result_field() {
    let report = sample_report();
    let text = report.render_text();

    assert!(text.starts_with("PULSE-BASED DISEASE PREDICTION SYSTEM - ANALYSIS REPORT\n"));
    assert!(text.contains("NOT a medical diagnostic tool"));
    assert!(text.contains("- Dominant Dosha: Pitta\n"));
    assert!(text.contains("- Confidence Level: 68%\n"));
    assert!(text.contains("- Health Risk Level: High\n"));
    assert!(text.contains("- Pulse Rate: 95 BPM\n"));
    assert!(text.contains("- Pulse Rhythm: Irregular\n"));
    assert!(text.contains("- Pulse Strength: Strong\n"));
    assert!(text.contains("- Body Temperature: Warm\n"));
    assert!(text.contains("- Stress Level: High\n"));
    assert!(text.contains(&report.result.explanation));
    for tendency in &report.result.health_tendencies {
        assert!(text.contains(&format!("- {tendency}\n")));
    }
    for (idx, suggestion) in report.result.suggestions.iter().enumerate() {
        assert!(text.contains(&format!("{}. {}\n", idx + 1, suggestion)));
    }
    assert!(text.contains("Generated: 2024-03-09 14:05:00 UTC\n"));
    assert!(text.ends_with(&format!("Report ID: {}\n", Uuid::nil())));
}

#[test]
fn report_json_round_trips() {
    let report = sample_report();
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["doshaPercentage"], 68);
    assert_eq!(value["observation"]["stressLevel"], "high");

    let back: PulseReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn report_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports");
    let report = sample_report();

    let path = report.write_to(&nested, "report.txt").unwrap();
    assert_eq!(path, nested.join("report.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report.render_text());
}

#[test]
fn new_reports_get_distinct_ids() {
    let o = sample_observation();
    let result = classify(&o).unwrap();
    let a = PulseReport::new(o, result.clone());
    let b = PulseReport::new(o, result);
    assert_ne!(a.id, b.id);
}
