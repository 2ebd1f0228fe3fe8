// crates/watertemp-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid file type '{filename}': only .csv files are accepted")]
    InvalidFileType { filename: String },

    #[error("file is {actual_bytes} bytes, which exceeds the {limit_bytes} byte limit")]
    FileTooLarge { actual_bytes: u64, limit_bytes: u64 },

    #[error("file is empty")]
    EmptyFile,

    #[error("could not parse file as CSV: {source}")]
    Parse {
        #[from]
        source: csv::Error,
    },

    #[error("file contains a header but no data rows")]
    InsufficientData,

    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("no rows matched '{characteristic}' with a numeric result value")]
    NoTemperatureData { characteristic: String },

    #[error("aggregation produced no location averages")]
    EmptyResult,
}

/// Stable classification tag for each failure, so callers (and wire formats)
/// can branch on kind instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFileType,
    FileTooLarge,
    EmptyFile,
    Parse,
    InsufficientData,
    MissingColumns,
    NoTemperatureData,
    EmptyResult,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFileType => "INVALID_FILE_TYPE",
            ErrorKind::FileTooLarge => "FILE_TOO_LARGE",
            ErrorKind::EmptyFile => "EMPTY_FILE",
            ErrorKind::Parse => "PARSE_ERROR",
            ErrorKind::InsufficientData => "INSUFFICIENT_DATA",
            ErrorKind::MissingColumns => "MISSING_COLUMNS",
            ErrorKind::NoTemperatureData => "NO_TEMPERATURE_DATA",
            ErrorKind::EmptyResult => "EMPTY_RESULT",
        }
    }
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidFileType { .. } => ErrorKind::InvalidFileType,
            AnalysisError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
            AnalysisError::EmptyFile => ErrorKind::EmptyFile,
            AnalysisError::Parse { .. } => ErrorKind::Parse,
            AnalysisError::InsufficientData => ErrorKind::InsufficientData,
            AnalysisError::MissingColumns { .. } => ErrorKind::MissingColumns,
            AnalysisError::NoTemperatureData { .. } => ErrorKind::NoTemperatureData,
            AnalysisError::EmptyResult => ErrorKind::EmptyResult,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
