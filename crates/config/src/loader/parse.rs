//! Line parser for `.env` files.
//!
//! Responsibilities:
//! - Turn one raw line into an optional `(key, value)` assignment.
//!
//! Does NOT handle:
//! - Quoting, escapes, interpolation or multi-line values. Everything between
//!   the first `=` and the first `#` is the raw value.
//!
//! Invariants:
//! - Text from the first `#` to end of line is a comment.
//! - Blank lines (after comment removal and trimming) yield `Ok(None)`.
//! - Keys and values are trimmed and never empty on success.

use super::error::DotenvError;

/// Parse one line. `line_no` is 1-based and only used for diagnostics.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<(&str, &str)>, DotenvError> {
    let content = match line.find('#') {
        Some(0) => return Ok(None),
        Some(idx) => &line[..idx],
        None => line,
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let Some((key, value)) = content.split_once('=') else {
        return Err(DotenvError::MissingSeparator { line: line_no });
    };

    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return Err(DotenvError::EmptyAssignment { line: line_no });
    }

    Ok(Some((key, value)))
}
