//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline-fatal errors.
///
/// Per-file problems never surface here; they become
/// [`crate::FileOutcome`] entries in the status list. The only fatal path
/// is serializing the assembled workbook.
#[derive(Debug, Error)]
pub enum Error {
    /// Workbook serialization failed
    #[error("Workbook serialization failed: {0}")]
    Xlsx(#[from] ismr_sheets_xlsx::XlsxError),
}
