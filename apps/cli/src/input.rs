//! # Input Helpers
//!
//! Prompting and parsing for the line-based session.
//!
//! ## Input Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Input Conventions                             │
//! │                                                                     │
//! │  q / quit / exit   (any case)   cancel the whole session            │
//! │  - / none / ""                  empty code list                     │
//! │  "a,b,c"  or  "a b c"           code list (comma or space split)    │
//! │                                                                     │
//! │  Plan codes are lowercased; add-on and premium code lists are       │
//! │  passed through as typed and validated by the engine.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use crate::error::SessionError;

/// Inputs that cancel the session, compared case-insensitively.
const CANCEL_SENTINELS: [&str; 3] = ["q", "quit", "exit"];

/// Inputs that mean "no codes", compared case-insensitively.
const EMPTY_SENTINELS: [&str; 2] = ["-", "none"];

/// Whether the input is a cancellation sentinel.
pub fn is_cancel(raw: &str) -> bool {
    CANCEL_SENTINELS.contains(&raw.to_lowercase().as_str())
}

/// Writes a prompt and reads one trimmed line.
///
/// End of input (closed stdin) is treated as cancellation.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, SessionError> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::Cancelled);
    }
    Ok(line.trim().to_string())
}

/// Prompts for a positive-or-otherwise integer; parsing is all that happens
/// here, range rules belong to the engine.
pub fn read_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<i64, SessionError> {
    let raw = prompt_line(input, out, prompt)?;
    if is_cancel(&raw) {
        return Err(SessionError::Cancelled);
    }
    raw.parse().map_err(|_| {
        SessionError::Invalid("Please enter a valid integer (or 'q' to cancel).".to_string())
    })
}

/// Prompts for a plan code, trimmed and lowercased.
pub fn read_plan_code<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, SessionError> {
    let raw = prompt_line(input, out, prompt)?.to_lowercase();
    if is_cancel(&raw) {
        return Err(SessionError::Cancelled);
    }
    Ok(raw)
}

/// Prompts for a code list. `-`, `none` or an empty line mean no codes;
/// codes may be separated by commas or whitespace.
pub fn read_codes<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Vec<String>, SessionError> {
    let raw = prompt_line(input, out, prompt)?;
    let lowered = raw.to_lowercase();
    if lowered.is_empty() || EMPTY_SENTINELS.contains(&lowered.as_str()) {
        return Ok(Vec::new());
    }
    if is_cancel(&raw) {
        return Err(SessionError::Cancelled);
    }
    Ok(split_codes(&raw))
}

/// Splits "a,b,c" or "a b c" (or a mix) into trimmed, non-empty codes.
fn split_codes(raw: &str) -> Vec<String> {
    raw.replace(' ', ",")
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_int_from(text: &str) -> Result<i64, SessionError> {
        let mut input = Cursor::new(text.to_string());
        let mut out = Vec::new();
        read_int(&mut input, &mut out, "? ")
    }

    fn read_codes_from(text: &str) -> Result<Vec<String>, SessionError> {
        let mut input = Cursor::new(text.to_string());
        let mut out = Vec::new();
        read_codes(&mut input, &mut out, "? ")
    }

    #[test]
    fn test_cancel_sentinels_any_case() {
        assert!(is_cancel("q"));
        assert!(is_cancel("Q"));
        assert!(is_cancel("QUIT"));
        assert!(is_cancel("Exit"));
        assert!(!is_cancel("quite"));
    }

    #[test]
    fn test_read_int_parses_trimmed_input() {
        assert_eq!(read_int_from("  3  \n").unwrap(), 3);
        assert_eq!(read_int_from("-2\n").unwrap(), -2);
    }

    #[test]
    fn test_read_int_rejects_garbage_with_hint() {
        let err = read_int_from("three\n").unwrap_err();
        assert!(matches!(err, SessionError::Invalid(_)));
        assert!(err.to_string().contains("valid integer"));
    }

    #[test]
    fn test_read_int_cancels_on_sentinel_and_eof() {
        assert!(matches!(read_int_from("q\n"), Err(SessionError::Cancelled)));
        assert!(matches!(read_int_from(""), Err(SessionError::Cancelled)));
    }

    #[test]
    fn test_read_codes_empty_forms() {
        assert!(read_codes_from("\n").unwrap().is_empty());
        assert!(read_codes_from("-\n").unwrap().is_empty());
        assert!(read_codes_from("none\n").unwrap().is_empty());
        assert!(read_codes_from("NONE\n").unwrap().is_empty());
    }

    #[test]
    fn test_read_codes_splits_on_commas_and_spaces() {
        assert_eq!(
            read_codes_from("nutrition,classes\n").unwrap(),
            vec!["nutrition", "classes"]
        );
        assert_eq!(
            read_codes_from("nutrition classes pt\n").unwrap(),
            vec!["nutrition", "classes", "pt"]
        );
        assert_eq!(
            read_codes_from("nutrition, classes  pt\n").unwrap(),
            vec!["nutrition", "classes", "pt"]
        );
    }

    #[test]
    fn test_read_codes_keeps_duplicates_for_the_engine() {
        // dedup is the engine's job, not the prompt's
        assert_eq!(read_codes_from("pt,pt\n").unwrap(), vec!["pt", "pt"]);
    }

    #[test]
    fn test_read_plan_code_lowercases() {
        let mut input = Cursor::new("BASIC\n".to_string());
        let mut out = Vec::new();
        assert_eq!(read_plan_code(&mut input, &mut out, "? ").unwrap(), "basic");
    }

    #[test]
    fn test_prompt_is_written_before_reading() {
        let mut input = Cursor::new("1\n".to_string());
        let mut out = Vec::new();
        read_int(&mut input, &mut out, "How many? ").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "How many? ");
    }
}
