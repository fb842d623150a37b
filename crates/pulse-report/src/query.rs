use crate::error::QueryError;
use pulse_core::{parse_pulse_rate, PulseObservation};
use tracing::debug;
use urlencoding::{decode, encode};

/// Pulse rate assumed when a query string carries no `pulseRate`.
pub const DEFAULT_PULSE_RATE: u32 = 72;

/// Encodes an observation as `pulseRate=..&rhythm=..&strength=..&temperature=..&stressLevel=..`.
pub fn to_query_string(obs: &PulseObservation) -> String {
    let rate = obs.pulse_rate.to_string();
    [
        ("pulseRate", rate.as_str()),
        ("rhythm", obs.rhythm.as_str()),
        ("strength", obs.strength.as_str()),
        ("temperature", obs.temperature.as_str()),
        ("stressLevel", obs.stress_level.as_str()),
    ]
    .iter()
    .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
    .collect::<Vec<_>>()
    .join("&")
}

#[derive(Default)]
struct RawFields {
    pulse_rate: Option<String>,
    rhythm: Option<String>,
    strength: Option<String>,
    temperature: Option<String>,
    stress_level: Option<String>,
}

/// Decodes a results-screen query string into a validated observation.
///
/// A leading `?` is optional and unknown keys are ignored. A repeated key
/// keeps its first value. An absent or empty `pulseRate` falls back to
/// `default_pulse_rate`; the four categorical fields are required.
pub fn parse_query(query: &str, default_pulse_rate: u32) -> Result<PulseObservation, QueryError> {
    let mut raw = RawFields::default();
    let query = query.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key)?;
        let value = decode_component(value)?;
        let slot = match key.as_str() {
            "pulseRate" => &mut raw.pulse_rate,
            "rhythm" => &mut raw.rhythm,
            "strength" => &mut raw.strength,
            "temperature" => &mut raw.temperature,
            "stressLevel" => &mut raw.stress_level,
            _ => {
                debug!(%key, "ignoring unknown query key");
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let pulse_rate = match raw.pulse_rate.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => parse_pulse_rate(text)?,
        _ => default_pulse_rate,
    };

    let observation = PulseObservation::from_fields(
        pulse_rate,
        raw.rhythm.as_deref().unwrap_or_default(),
        raw.strength.as_deref().unwrap_or_default(),
        raw.temperature.as_deref().unwrap_or_default(),
        raw.stress_level.as_deref().unwrap_or_default(),
    )?
    .validated()?;
    Ok(observation)
}

/// Form-urlencoded component: `+` is a space, then `%XX` escapes.
fn decode_component(component: &str) -> Result<String, QueryError> {
    decode(&component.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| QueryError::BadEncoding(component.to_string()))
}
