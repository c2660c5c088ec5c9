//! ISMR text parsing
//!
//! ISMR files are plain text: comma-delimited data lines, `#`-prefixed
//! comment lines, no fixed schema and no quoting (a literal comma inside a
//! field is indistinguishable from a delimiter). Field counts vary from line
//! to line; parsing normalizes every row to the widest row of the file by
//! right-padding with empty strings.

use std::borrow::Cow;

/// Result of parsing one ISMR file.
///
/// Parsing is total: malformed bytes are decoded lossily and a file without
/// data lines is reported as [`ParseOutcome::Empty`] rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// At least one data line; rows normalized to a uniform width.
    Rows(Vec<Vec<String>>),
    /// No data lines after blank/comment filtering.
    Empty,
}

/// Parse raw file bytes.
///
/// Bytes are decoded as UTF-8 with invalid sequences replaced (never an
/// error), then handed to [`parse_str`].
pub fn parse_bytes(bytes: &[u8]) -> ParseOutcome {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => parse_str(text),
        Cow::Owned(text) => parse_str(&text),
    }
}

/// Parse decoded ISMR text.
///
/// Lines are split on `\n` or `\r` (covering LF, CRLF and bare-CR files; the
/// empty fragment between a CR and an LF is dropped with the other blank
/// lines) and trimmed. Lines that are empty after trimming, or whose first
/// character is `#`, are discarded. The rest are split on literal commas and
/// right-padded to the maximum field count of the file. Fields themselves are
/// not trimmed.
pub fn parse_str(text: &str) -> ParseOutcome {
    let data_lines: Vec<&str> = text
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if data_lines.is_empty() {
        return ParseOutcome::Empty;
    }

    let mut rows: Vec<Vec<String>> = data_lines
        .iter()
        .map(|line| line.split(',').map(str::to_owned).collect())
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }

    ParseOutcome::Rows(rows)
}
