//! Sheet name derivation from file names

use crate::MAX_SHEET_NAME_LEN;

/// Derive a workbook sheet name from an input file name.
///
/// Takes the stem (everything before the last dot; the whole name when there
/// is no dot), maps every character that is not an ASCII letter or digit to
/// `_` (one underscore per character, multi-byte included), and truncates to
/// the first [`MAX_SHEET_NAME_LEN`] characters. A file name with an empty
/// stem (e.g. `.ismr`) falls back to `"Sheet"`.
///
/// The result is deterministic and always matches `[A-Za-z0-9_]{1,31}`.
/// Uniqueness within a workbook is the caller's concern; see
/// [`crate::Workbook::unique_sheet_name`].
pub fn derive_sheet_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    };

    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    if sanitized.is_empty() {
        "Sheet".to_string()
    } else {
        sanitized
    }
}
