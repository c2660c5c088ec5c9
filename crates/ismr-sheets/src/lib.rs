//! # ismr-sheets
//!
//! Convert delimited ISMR text files into a single multi-sheet XLSX workbook.
//!
//! ISMR files are plain text: comma-delimited data lines, `#`-prefixed
//! comment lines, no fixed schema. The converter creates one worksheet per
//! input file, normalizes ragged rows by right-padding with empty fields,
//! and reports a per-file status (success, warning, or error) alongside the
//! produced workbook bytes.
//!
//! ## Example
//!
//! ```rust
//! use ismr_sheets::prelude::*;
//!
//! let files = vec![
//!     InputFile::new("day001.ismr", b"# survey log\nGPS,12,3.5\nGLO,7\n".to_vec()),
//!     InputFile::new("notes.txt", b"# nothing but comments\n".to_vec()),
//! ];
//!
//! let result = convert(&files, &ConvertOptions::default()).unwrap();
//!
//! assert!(result.workbook.is_some());
//! assert_eq!(result.statuses.len(), 2);
//! assert!(matches!(result.statuses[0].outcome, FileOutcome::Success { rows: 2, .. }));
//! assert!(matches!(result.statuses[1].outcome, FileOutcome::Warning(_)));
//! ```

pub mod error;
pub mod pipeline;
pub mod prelude;

pub use error::{Error, Result};
pub use pipeline::{convert, ConvertOptions, ExportResult, FileOutcome, FileStatus, InputFile};

// Re-export core types
pub use ismr_sheets_core::{ismr, name, ParseOutcome, Sheet, Workbook, MAX_SHEET_NAME_LEN};

// Re-export I/O types
pub use ismr_sheets_xlsx::{XlsxError, XlsxReader, XlsxResult, XlsxWriter};

/// Default file name offered for the produced workbook
pub const OUTPUT_FILE_NAME: &str = "ismr_merged_output.xlsx";

/// MIME type of the produced workbook
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
