//! # ismr-sheets-core
//!
//! Core data structures for the ismr-sheets converter.
//!
//! This crate provides the fundamental types used throughout ismr-sheets:
//! - [`Workbook`] and [`Sheet`] - the in-memory table model
//! - [`ismr`] - parsing of comma-delimited, `#`-comment-tolerant ISMR text
//! - [`name`] - derivation of workbook sheet names from file names
//!
//! ## Example
//!
//! ```rust
//! use ismr_sheets_core::{ismr, name, Sheet, Workbook};
//!
//! let mut workbook = Workbook::new();
//!
//! if let ismr::ParseOutcome::Rows(rows) = ismr::parse_bytes(b"# log\nGPS,12,3.5\nGLO,7\n") {
//!     let mut sheet = Sheet::new(name::derive_sheet_name("day001.ismr"));
//!     for row in rows {
//!         sheet.append_row(row);
//!     }
//!     workbook.add_sheet(sheet).unwrap();
//! }
//!
//! assert_eq!(workbook.sheet_count(), 1);
//! assert_eq!(workbook.sheet(0).unwrap().cell(1, 2), Some(""));
//! ```

pub mod error;
pub mod ismr;
pub mod name;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use error::{Error, Result};
pub use ismr::ParseOutcome;
pub use sheet::Sheet;
pub use workbook::Workbook;

/// Maximum length of a sheet name (Excel limit)
pub const MAX_SHEET_NAME_LEN: usize = 31;
