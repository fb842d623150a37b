use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

const RHYTHMS: [(&str, &str); 2] = [
    ("regular", "Steady and consistent"),
    ("irregular", "Variable beats"),
];
const STRENGTHS: [(&str, &str); 3] = [
    ("weak", "Light and delicate"),
    ("normal", "Moderate and balanced"),
    ("strong", "Forceful and prominent"),
];
const TEMPERATURES: [(&str, &str); 3] = [
    ("cool", "Feeling cold or chilly"),
    ("normal", "Neutral temperature"),
    ("warm", "Feeling hot or feverish"),
];
const STRESS_LEVELS: [(&str, &str); 3] = [
    ("low", "Calm and relaxed"),
    ("medium", "Moderate stress"),
    ("high", "Significant stress or anxiety"),
];

/// A required flag restricted to the form's choices. The canonical lowercase
/// name is stored, so `FromStr` in `pulse-core` does the final parse.
fn categorical(
    name: &'static str,
    value_name: &'static str,
    choices: &[(&'static str, &'static str)],
    help: &'static str,
) -> Arg {
    let values = choices
        .iter()
        .map(|&(value, about)| PossibleValue::new(value).help(about));
    Arg::new(name)
        .long(name)
        .required(true)
        .value_name(value_name)
        .value_parser(PossibleValuesParser::new(values))
        .ignore_case(true)
        .help(help)
}

fn report_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the full report as JSON instead of a text summary"),
    )
    .arg(
        Arg::new("report")
            .long("report")
            .action(ArgAction::SetTrue)
            .help("Write the plain-text analysis report to the report directory"),
    )
    .arg(
        Arg::new("report-dir")
            .long("report-dir")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .help("Directory for --report output (overrides config report_dir)"),
    )
}

pub fn build() -> Command {
    let analyze = Command::new("analyze")
        .about("Classify one pulse reading given as flags")
        .arg(
            Arg::new("pulse-rate")
                .long("pulse-rate")
                .required(true)
                .value_name("BPM")
                .value_parser(value_parser!(u32))
                .help("Pulse rate in beats per minute (40..=120)"),
        )
        .arg(categorical("rhythm", "RHYTHM", &RHYTHMS, "Pulse rhythm"))
        .arg(categorical("strength", "STRENGTH", &STRENGTHS, "Pulse strength"))
        .arg(categorical("temperature", "TEMPERATURE", &TEMPERATURES, "Body temperature feeling"))
        .arg(categorical("stress-level", "LEVEL", &STRESS_LEVELS, "Stress level"));

    let query = Command::new("query")
        .about("Classify a reading carried as a results-screen query string")
        .arg(
            Arg::new("query")
                .required(true)
                .value_name("QUERY")
                .help("e.g. pulseRate=72&rhythm=regular&strength=normal&temperature=normal&stressLevel=low"),
        );

    let batch = Command::new("batch")
        .about("Classify a JSON array of readings and summarize the dosha distribution")
        .arg(
            Arg::new("file")
                .required(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("JSON file holding an array of observations"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results and distribution as JSON"),
        );

    let profile = Command::new("profile")
        .about("Show the elements and traits of a dosha")
        .arg(
            Arg::new("dosha")
                .required(true)
                .value_name("DOSHA")
                .help("Vata | Pitta | Kapha"),
        );

    Command::new("pulse-analyze")
        .about("Educational pulse-based dosha classifier. Not a medical diagnostic tool.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a JSON configuration file"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_name("FORMAT")
                .value_parser(["plain", "json"])
                .help("Log output format on stderr"),
        )
        .subcommand(report_args(analyze))
        .subcommand(report_args(query))
        .subcommand(batch)
        .subcommand(profile)
}
