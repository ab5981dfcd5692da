//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while assembling or writing a package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Operation called in the wrong lifecycle state
    #[error("Call order error: {0}")]
    Ordering(String),

    /// Sheet index out of range
    #[error("Sheet index {0} out of bounds")]
    MissingSheet(usize),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] blocksheet_core::Error),
}
