use csv::ReaderBuilder;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::types::SampleRecord;

struct ColumnLayout {
    location: usize,
    characteristic: usize,
    value: usize,
}

/// Parses CSV content into typed records.
///
/// Headers are normalized (lower-cased, trimmed) and the three required
/// columns are resolved once against the header row; data rows are then read
/// by position. Extra columns are ignored. Rows shorter than the resolved
/// layout yield empty fields, which the filter stage drops.
pub fn parse_samples(contents: &[u8], config: &AnalysisConfig) -> Result<Vec<SampleRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents);

    let normalized: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    if rows.is_empty() {
        return Err(AnalysisError::InsufficientData);
    }

    let layout = resolve_columns(&normalized, config)?;

    debug!(rows = rows.len(), "parsed csv data rows");

    Ok(rows
        .into_iter()
        .map(|record| SampleRecord {
            location_id: record.get(layout.location).unwrap_or("").to_string(),
            characteristic: record.get(layout.characteristic).unwrap_or("").to_string(),
            value: record.get(layout.value).unwrap_or("").to_string(),
        })
        .collect())
}

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn resolve_columns(normalized: &[String], config: &AnalysisConfig) -> Result<ColumnLayout> {
    let position = |name: &str| normalized.iter().position(|header| header == name);

    let location = position(&config.location_column);
    let characteristic = position(&config.characteristic_column);
    let value = position(&config.value_column);

    match (location, characteristic, value) {
        (Some(location), Some(characteristic), Some(value)) => Ok(ColumnLayout {
            location,
            characteristic,
            value,
        }),
        _ => {
            let missing = config
                .required_columns()
                .into_iter()
                .filter(|name| position(name).is_none())
                .map(str::to_string)
                .collect();
            Err(AnalysisError::MissingColumns { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_header;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_header(" MonitoringLocationID "), "monitoringlocationid");
        assert_eq!(normalize_header("MONITORINGLOCATIONID"), "monitoringlocationid");
        assert_eq!(normalize_header("resultvalue"), "resultvalue");
    }
}
