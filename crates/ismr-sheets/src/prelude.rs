//! Prelude module - common imports for ismr-sheets users
//!
//! ```rust
//! use ismr_sheets::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    convert,
    ConvertOptions,

    // Error types
    Error,
    ExportResult,
    FileOutcome,
    FileStatus,
    InputFile,
    Result,

    // Main types
    Sheet,
    Workbook,

    // I/O types
    XlsxReader,
    XlsxWriter,

    // Constants
    OUTPUT_FILE_NAME,
    XLSX_MIME_TYPE,
};
