//! Dotted version string parsing and ordering

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Maximum number of segments kept by strict parsing (major, minor, patch)
const MAX_SEGMENTS: usize = 3;

static STRICT_VERSION: OnceLock<Regex> = OnceLock::new();
static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();

fn strict_version_regex() -> &'static Regex {
    STRICT_VERSION.get_or_init(|| {
        Regex::new(r"\A(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*)){1,2}\z")
            .unwrap_or_else(|e| unreachable!("strict version pattern is valid: {e}"))
    })
}

fn digit_run_regex() -> &'static Regex {
    DIGIT_RUN.get_or_init(|| {
        Regex::new("[0-9]+").unwrap_or_else(|e| unreachable!("digit pattern is valid: {e}"))
    })
}

/// How version strings are turned into comparable tuples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionParsingMode {
    /// `X.Y` or `X.Y.Z`, digits only, no leading zeroes. Anything else is an error.
    #[default]
    Strict,
    /// Every run of digits in the string, in order. Never fails.
    Lenient,
}

impl VersionParsingMode {
    /// Parse a version string under this mode
    ///
    /// # Errors
    /// Returns [`Error::InvalidVersionFormat`] in strict mode when the string
    /// is not a plain dotted version.
    pub fn parse(self, version: &str) -> Result<VersionTuple> {
        match self {
            Self::Strict => parse_strict(version),
            Self::Lenient => Ok(parse_lenient(version)),
        }
    }

    /// Get a human-readable name for this mode
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

/// One numeric version segment of any size.
///
/// Stored as its decimal digits without leading zeroes, so a longer digit
/// string is always the larger number and equal lengths compare by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    /// Build a segment from a run of ASCII digits
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// The segment's decimal digits
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Segment {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed version segments, ordered like a tuple.
///
/// A tuple that is a prefix of another orders first, so `1.2 < 1.2.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple(Vec<Segment>);

impl VersionTuple {
    /// Build a tuple from parsed segments
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// The parsed segments
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Whether no segments were found (lenient parsing of a digit-free string)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[u64; N]> for VersionTuple {
    fn from(segments: [u64; N]) -> Self {
        Self(segments.into_iter().map(Segment::from).collect())
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{segment}")?;
        }
        write!(f, ")")
    }
}

fn parse_strict(version: &str) -> Result<VersionTuple> {
    if !strict_version_regex().is_match(version) {
        return Err(Error::InvalidVersionFormat {
            version: version.to_string(),
        });
    }

    let segments = version
        .split('.')
        .take(MAX_SEGMENTS)
        .map(Segment::from_digits)
        .collect();

    Ok(VersionTuple(segments))
}

fn parse_lenient(version: &str) -> VersionTuple {
    let segments = digit_run_regex()
        .find_iter(version)
        .map(|m| Segment::from_digits(m.as_str()))
        .collect();

    VersionTuple(segments)
}
