use tracing::info;

use crate::aggregator::{aggregate_by_location, ResultSet};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::filter::collect_observations;
use crate::parser::parse_samples;
use crate::types::CsvUpload;
use crate::validation::validate_upload;

/// Runs the full analysis: upload checks, parse, filter, aggregate.
///
/// A pure function of the upload bytes and config; the first failing stage
/// raises its taxonomy entry and no partial result is ever returned. Rows
/// that are individually invalid are skipped by the filter stage, so a file
/// only fails outright when nothing usable remains.
pub fn analyze(upload: &CsvUpload<'_>, config: &AnalysisConfig) -> Result<ResultSet> {
    validate_upload(upload, config)?;

    let records = parse_samples(upload.contents, config)?;
    let observations = collect_observations(&records, config);

    if observations.is_empty() {
        return Err(AnalysisError::NoTemperatureData {
            characteristic: config.target_characteristic.clone(),
        });
    }

    let averages = aggregate_by_location(observations, config.decimal_places);
    if averages.is_empty() {
        // unreachable if the match check above held, but this guards the
        // aggregation stage independently
        return Err(AnalysisError::EmptyResult);
    }

    info!(locations = averages.len(), "analysis complete");
    Ok(averages)
}
