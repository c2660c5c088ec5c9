//! A1-style cell reference helpers

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA, ...)
pub fn column_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Format a 0-based (row, col) pair as an A1-style reference
pub fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_to_letters(col), row + 1)
}

/// Parse an A1-style reference into a 0-based (row, col) pair.
///
/// Returns `None` for anything that is not letters followed by a 1-based
/// row number. `$` markers are not expected in worksheet cell `r`
/// attributes and are rejected.
pub fn parse_cell_ref(s: &str) -> Option<(usize, usize)> {
    let split = s.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = s.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        col = col * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }

    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }

    Some((row - 1, col - 1))
}
