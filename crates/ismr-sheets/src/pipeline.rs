//! Tabular export pipeline
//!
//! The single orchestration stage of the converter: takes named byte blobs
//! in upload order, parses each independently, and assembles one workbook
//! plus an ordered status list. A failing file never aborts the others.

use std::path::Path;

use crate::error::Result;
use ismr_sheets_core::{ismr, name, ParseOutcome, Sheet, Workbook};
use ismr_sheets_xlsx::XlsxWriter;

/// One named raw input blob, in upload order
#[derive(Debug, Clone)]
pub struct InputFile {
    /// File name as supplied by the caller
    pub name: String,
    /// Raw file contents; decoded lossily during parsing
    pub bytes: Vec<u8>,
}

impl InputFile {
    /// Create an input from a name and raw bytes
    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an input from a filesystem path, naming it after the file
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

/// Conversion options
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Present the first data row of every sheet as a header
    /// (bold + frozen top row). Row content and counts are unaffected.
    pub use_header: bool,
}

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FileOutcome {
    /// A sheet was created
    Success {
        /// Name of the created sheet
        sheet: String,
        /// Number of data rows written
        rows: usize,
    },
    /// The file was skipped without creating a sheet
    Warning(String),
    /// Processing the file failed
    Error(String),
}

/// Per-file status record, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileStatus {
    /// Name of the input file this status describes
    pub file_name: String,
    /// Outcome for this file
    pub outcome: FileOutcome,
}

/// Result of one conversion invocation
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Serialized workbook; `None` when no file produced a sheet
    pub workbook: Option<Vec<u8>>,
    /// One status per input file, in input order
    pub statuses: Vec<FileStatus>,
}

impl ExportResult {
    /// Number of inputs that produced a sheet
    pub fn success_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s.outcome, FileOutcome::Success { .. }))
            .count()
    }
}

/// Convert a set of ISMR files into one workbook.
///
/// Files are processed strictly sequentially in input order, each one
/// independently: lossy UTF-8 decode, comment/blank filtering, comma
/// splitting, ragged-row normalization, then a sheet named after the file
/// ([`name::derive_sheet_name`], disambiguated with `_2`, `_3`, ... on
/// collision). A file without data lines yields a [`FileOutcome::Warning`]
/// and no sheet.
///
/// The only fatal path is serializing the assembled workbook; when no sheet
/// was created at all, serialization is skipped and `workbook` is `None`.
pub fn convert(files: &[InputFile], options: &ConvertOptions) -> Result<ExportResult> {
    let mut workbook = Workbook::new();
    let mut statuses = Vec::with_capacity(files.len());

    for file in files {
        let outcome = process_file(&mut workbook, file, options);
        tracing::debug!(file = %file.name, outcome = ?outcome, "processed input");
        statuses.push(FileStatus {
            file_name: file.name.clone(),
            outcome,
        });
    }

    let workbook_bytes = if workbook.is_empty() {
        None
    } else {
        Some(XlsxWriter::write_bytes(&workbook)?)
    };

    Ok(ExportResult {
        workbook: workbook_bytes,
        statuses,
    })
}

fn process_file(workbook: &mut Workbook, file: &InputFile, options: &ConvertOptions) -> FileOutcome {
    let rows = match ismr::parse_bytes(&file.bytes) {
        ParseOutcome::Rows(rows) => rows,
        ParseOutcome::Empty => return FileOutcome::Warning("empty or only comments".into()),
    };

    let base = name::derive_sheet_name(&file.name);
    let sheet_name = workbook.unique_sheet_name(&base);

    let mut sheet = Sheet::new(sheet_name.clone());
    let row_count = rows.len();
    for row in rows {
        sheet.append_row(row);
    }
    sheet.set_header_row(options.use_header);

    // Disambiguation makes a name rejection unreachable, but a model error
    // still only costs this one file.
    match workbook.add_sheet(sheet) {
        Ok(_) => FileOutcome::Success {
            sheet: sheet_name,
            rows: row_count,
        },
        Err(e) => FileOutcome::Error(e.to_string()),
    }
}
