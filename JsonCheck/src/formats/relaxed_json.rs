//! Relaxed JSON reading
//!
//! Standard JSON plus `//` line comments, `/* */` block comments and
//! trailing commas before a closing `]` or `}`. Comments and trailing commas
//! are blanked out with spaces (newlines kept) before the text is handed to
//! `serde_json`, so parse errors still report the source line and column.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Read a relaxed JSON file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid relaxed JSON.
pub fn read_relaxed_json<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    parse_relaxed_json(&content)
}

/// Parse relaxed JSON from a string
///
/// # Errors
/// Returns an error if the text is malformed once comments and trailing
/// commas are removed.
pub fn parse_relaxed_json(content: &str) -> Result<Value> {
    let cleaned = strip_trailing_commas(&strip_comments(content));
    let value = serde_json::from_str(&cleaned)?;
    Ok(value)
}

/// Blank out `//` and `/* */` comments that are not inside string literals.
///
/// An unterminated block comment runs to the end of the input.
#[must_use]
pub fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                out.push(' ');
                for next in chars.by_ref() {
                    push_blank(&mut out, next);
                    if next == '\n' || next == '\r' {
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for next in chars.by_ref() {
                    push_blank(&mut out, next);
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Blank out commas that are followed (after whitespace) by `]` or `}`.
///
/// Expects comments to have been stripped already.
#[must_use]
pub fn strip_trailing_commas(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' if closes_container(&chars[i + 1..]) => out.push(' '),
            _ => out.push(c),
        }
    }

    out
}

fn closes_container(rest: &[char]) -> bool {
    rest.iter()
        .find(|c| !c.is_whitespace())
        .is_some_and(|&c| matches!(c, ']' | '}'))
}

/// Keep line structure intact so error positions stay meaningful
fn push_blank(out: &mut String, c: char) {
    out.push(if c == '\n' || c == '\r' { c } else { ' ' });
}
