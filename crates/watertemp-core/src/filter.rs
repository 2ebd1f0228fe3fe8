use tracing::debug;

use crate::config::AnalysisConfig;
use crate::types::{SampleRecord, TemperatureObservation};

/// Keeps rows whose characteristic matches the configured target exactly
/// (case-insensitive, trimmed) and whose value parses to a finite number.
/// Rows that fail any check are skipped, never escalated to a file error.
pub fn collect_observations(
    records: &[SampleRecord],
    config: &AnalysisConfig,
) -> Vec<TemperatureObservation> {
    let mut observations = Vec::new();

    for record in records {
        let location_id = record.location_id.trim();
        let characteristic = record.characteristic.trim();
        let value = record.value.trim();

        if location_id.is_empty() || characteristic.is_empty() || value.is_empty() {
            continue;
        }
        if !config.matches_characteristic(characteristic) {
            continue;
        }
        let Some(parsed) = parse_leading_f64(value) else {
            continue;
        };

        observations.push(TemperatureObservation {
            location_id: location_id.to_string(),
            value: parsed,
        });
    }

    debug!(matched = observations.len(), "filtered temperature observations");
    observations
}

/// Parses the longest leading numeric prefix of `raw`, so `"21.5abc"` yields
/// 21.5 and `"invalid"` yields nothing. Non-finite results are rejected.
pub(crate) fn parse_leading_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(|byte| byte.is_ascii_digit()) {
        end += 1;
    }
    let has_int = end > int_start;

    let mut has_frac = false;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut cursor = frac_start;
        while bytes.get(cursor).is_some_and(|byte| byte.is_ascii_digit()) {
            cursor += 1;
        }
        has_frac = cursor > frac_start;
        if has_int || has_frac {
            end = cursor;
        }
    }

    if !has_int && !has_frac {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+') | Some(b'-')) {
            cursor += 1;
        }
        let digits_start = cursor;
        while bytes.get(cursor).is_some_and(|byte| byte.is_ascii_digit()) {
            cursor += 1;
        }
        if cursor > digits_start {
            end = cursor;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
