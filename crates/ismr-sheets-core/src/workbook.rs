//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook holds zero or more sheets in insertion order. Unlike a desktop
/// spreadsheet it starts with no sheets at all: the converter creates exactly
/// one sheet per successfully parsed input file.
#[derive(Debug, Default)]
pub struct Workbook {
    /// Sheets in the workbook
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a new workbook with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Iterate over all sheets in workbook order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Add a sheet to the end of the workbook
    ///
    /// The sheet's name is validated: it must be non-empty, at most
    /// [`MAX_SHEET_NAME_LEN`] characters, free of the characters Excel
    /// forbids, and unique within the workbook (case-insensitive).
    /// Returns the index of the added sheet.
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name())?;
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Produce a sheet name based on `base` that is not yet taken
    ///
    /// Returns `base` itself when free, otherwise appends `_2`, `_3`, ...,
    /// truncating the base so the result never exceeds
    /// [`MAX_SHEET_NAME_LEN`] characters.
    pub fn unique_sheet_name(&self, base: &str) -> String {
        if !self.name_taken(base) {
            return base.to_string();
        }
        let mut n: usize = 2;
        loop {
            let suffix = format!("_{}", n);
            let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.len());
            let mut candidate: String = base.chars().take(keep).collect();
            candidate.push_str(&suffix);
            if !self.name_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Check whether a name is already used (case-insensitive)
    fn name_taken(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.sheets.iter().any(|s| s.name().to_lowercase() == lower)
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(*c) {
                return Err(Error::InvalidSheetName(format!(
                    "Sheet name cannot contain '{}'",
                    c
                )));
            }
        }

        if self.name_taken(name) {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}
