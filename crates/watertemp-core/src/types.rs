// crates/watertemp-core/src/types.rs

use serde::{Deserialize, Serialize};

/// The input boundary object. Filename and byte size are advisory metadata
/// supplied by whatever collected the upload.
#[derive(Debug)]
pub struct CsvUpload<'a> {
    pub filename: &'a str,
    pub contents: &'a [u8],
}

impl<'a> CsvUpload<'a> {
    pub fn new(filename: &'a str, contents: &'a [u8]) -> Self {
        Self { filename, contents }
    }

    pub fn size_bytes(&self) -> u64 {
        self.contents.len() as u64
    }
}

/// One data row, reduced to the three required fields right after parsing.
/// Field text is kept raw; trimming and matching happen in the filter stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub location_id: String,
    pub characteristic: String,
    pub value: String,
}

/// A row that passed the characteristic and numeric checks.
/// `location_id` is non-empty and `value` is always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub location_id: String,
    pub value: f64,
}
