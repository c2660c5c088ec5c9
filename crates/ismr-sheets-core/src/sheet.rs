//! Sheet type - a named table of string cells

/// A single sheet: a name plus rows of string fields.
///
/// Rows coming out of [`crate::ismr`] are already normalized to a uniform
/// width; the sheet itself stores whatever it is given and reports the widest
/// row as its column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name (validated when added to a workbook)
    name: String,
    /// Row-major cell data
    rows: Vec<Vec<String>>,
    /// Present row 0 as a header (bold + frozen top row) when written
    header_row: bool,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            header_row: false,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Append a row of fields at the bottom of the sheet
    pub fn append_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// All rows, in insertion order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the widest row; 0 for an empty sheet)
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by 0-based row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Whether row 0 is presented as a header row
    pub fn header_row(&self) -> bool {
        self.header_row
    }

    /// Mark row 0 as a header row (bold + frozen when written)
    pub fn set_header_row(&mut self, header_row: bool) {
        self.header_row = header_row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::new("Data");
        assert_eq!(sheet.name(), "Data");
        assert!(sheet.is_empty());
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.column_count(), 0);
        assert_eq!(sheet.cell(0, 0), None);
    }

    #[test]
    fn test_append_and_access() {
        let mut sheet = Sheet::new("Data");
        sheet.append_row(vec!["a".into(), "b".into()]);
        sheet.append_row(vec!["c".into(), "d".into(), "e".into()]);

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 3);
        assert_eq!(sheet.cell(0, 1), Some("b"));
        assert_eq!(sheet.cell(1, 2), Some("e"));
        assert_eq!(sheet.cell(0, 2), None);
        assert_eq!(sheet.cell(2, 0), None);
    }

    #[test]
    fn test_header_row_flag() {
        let mut sheet = Sheet::new("Data");
        assert!(!sheet.header_row());
        sheet.set_header_row(true);
        assert!(sheet.header_row());
    }
}
