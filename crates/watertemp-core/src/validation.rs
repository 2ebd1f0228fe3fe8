// crates/watertemp-core/src/validation.rs

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::types::CsvUpload;

/// Checks the upload metadata and raw content before any parsing happens.
/// Each check fails with its own taxonomy entry; the first failure wins.
pub fn validate_upload(upload: &CsvUpload<'_>, config: &AnalysisConfig) -> Result<()> {
    check_file_type(upload.filename)?;
    check_file_size(upload.size_bytes(), config.max_file_bytes)?;
    check_not_blank(upload.contents)?;
    Ok(())
}

fn check_file_type(filename: &str) -> Result<()> {
    if filename.trim().to_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(AnalysisError::InvalidFileType {
            filename: filename.to_string(),
        })
    }
}

fn check_file_size(actual_bytes: u64, limit_bytes: u64) -> Result<()> {
    if actual_bytes > limit_bytes {
        return Err(AnalysisError::FileTooLarge {
            actual_bytes,
            limit_bytes,
        });
    }
    Ok(())
}

fn check_not_blank(contents: &[u8]) -> Result<()> {
    if contents.iter().all(|byte| byte.is_ascii_whitespace()) {
        return Err(AnalysisError::EmptyFile);
    }
    Ok(())
}
