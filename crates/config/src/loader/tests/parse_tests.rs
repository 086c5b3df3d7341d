//! Tests for the `.env` line grammar.

use crate::loader::{DotenvError, parse_line};

#[test]
fn test_simple_assignment() {
    assert_eq!(parse_line("DB_MAX=6", 1), Ok(Some(("DB_MAX", "6"))));
}

#[test]
fn test_key_and_value_are_trimmed() {
    assert_eq!(
        parse_line("  DB_HOST =  localhost\t", 1),
        Ok(Some(("DB_HOST", "localhost")))
    );
}

#[test]
fn test_value_keeps_later_equals_signs() {
    assert_eq!(
        parse_line("DSN=user=app;pass=x", 1),
        Ok(Some(("DSN", "user=app;pass=x")))
    );
}

#[test]
fn test_full_line_comment() {
    assert_eq!(parse_line("# DB_MAX=6", 1), Ok(None));
    assert_eq!(parse_line("#", 1), Ok(None));
}

#[test]
fn test_indented_comment_is_blank() {
    assert_eq!(parse_line("   # note", 1), Ok(None));
}

#[test]
fn test_trailing_comment_is_stripped() {
    assert_eq!(
        parse_line("LOG_LEVEL=debug # noisy", 1),
        Ok(Some(("LOG_LEVEL", "debug")))
    );
}

#[test]
fn test_hash_inside_value_starts_comment() {
    // No quoting or escaping: the first '#' always starts a comment.
    assert_eq!(parse_line("COLOR=#ff0000", 4), Err(DotenvError::EmptyAssignment { line: 4 }));
    assert_eq!(parse_line("PASS=ab#cd", 1), Ok(Some(("PASS", "ab"))));
}

#[test]
fn test_blank_lines_are_skipped() {
    assert_eq!(parse_line("", 1), Ok(None));
    assert_eq!(parse_line("   \t ", 1), Ok(None));
    assert_eq!(parse_line("\r", 1), Ok(None));
}

#[test]
fn test_missing_separator_reports_line() {
    assert_eq!(
        parse_line("BADLINE", 7),
        Err(DotenvError::MissingSeparator { line: 7 })
    );
}

#[test]
fn test_empty_key_or_value_rejected() {
    assert_eq!(parse_line("=value", 2), Err(DotenvError::EmptyAssignment { line: 2 }));
    assert_eq!(parse_line("KEY=", 3), Err(DotenvError::EmptyAssignment { line: 3 }));
    assert_eq!(parse_line("KEY=   ", 3), Err(DotenvError::EmptyAssignment { line: 3 }));
    assert_eq!(parse_line(" = ", 5), Err(DotenvError::EmptyAssignment { line: 5 }));
}

#[test]
fn test_quotes_are_kept_verbatim() {
    assert_eq!(
        parse_line("GREETING=\"hello world\"", 1),
        Ok(Some(("GREETING", "\"hello world\"")))
    );
}
