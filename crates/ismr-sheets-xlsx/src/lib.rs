//! # ismr-sheets-xlsx
//!
//! XLSX (Office Open XML) writer and reader for ismr-sheets.
//!
//! The writer serializes an [`ismr_sheets_core::Workbook`] to an in-memory or
//! on-disk `.xlsx` archive, writing every cell as an inline string. The reader
//! is string-oriented: it loads this tool's output (and reasonable foreign
//! workbooks) back into the core model for inspection and testing.

pub mod error;
pub mod reader;
pub mod writer;

mod a1;
mod styles;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;
