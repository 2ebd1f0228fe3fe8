// crates/watertemp-core/src/config.rs

/// Immutable settings for one analysis run. The pipeline takes this by
/// reference everywhere; tests swap in alternate thresholds.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub max_file_bytes: u64,
    /// Compared case-insensitively after trimming both sides.
    pub target_characteristic: String,
    pub decimal_places: u32,
    /// Normalized (lower-cased, trimmed) header names of the required columns.
    pub location_column: String,
    pub characteristic_column: String,
    pub value_column: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            target_characteristic: "Temperature, water".to_string(),
            decimal_places: 2,
            location_column: "monitoringlocationid".to_string(),
            characteristic_column: "characteristicname".to_string(),
            value_column: "resultvalue".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn required_columns(&self) -> [&str; 3] {
        [
            &self.location_column,
            &self.characteristic_column,
            &self.value_column,
        ]
    }

    pub fn matches_characteristic(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.target_characteristic.trim().to_lowercase()
    }
}
