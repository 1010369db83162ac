//! Error types for `JsonCheck`

use thiserror::Error;

/// The error type for `JsonCheck` operations.
///
/// Every variant is a per-file failure: the batch driver turns it into a
/// `❌` line and keeps going.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Parse Errors ====================
    /// The file could not be opened or read as UTF-8 text.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not valid relaxed JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    // ==================== Version Errors ====================
    /// A version string does not match `X.Y` or `X.Y.Z` (strict parsing only).
    #[error(
        "Invalid version format: '{version}'. Must be in the form X.Y or X.Y.Z with no leading zeroes."
    )]
    InvalidVersionFormat {
        /// The offending version string.
        version: String,
    },

    /// The `version` field holds something other than a string.
    #[error("'version' field must be a string, found {found}")]
    InvalidVersionType {
        /// JSON type name of the value found.
        found: &'static str,
    },

    // ==================== Mod Metadata Errors ====================
    /// A `mod.json`-suffixed file has no `version` key.
    #[error("Missing 'version' field")]
    MissingVersionField,

    /// An exact `mod.json` file has no `changelog` key, or it is not an object.
    #[error("Does not have a valid 'changelog' field")]
    MissingOrInvalidChangelog,

    /// The `changelog` object has no entries to compare against.
    #[error("'changelog' field has no entries")]
    EmptyChangelog,

    /// The declared version is older than the newest changelog entry.
    #[error(
        "Version mismatch: 'version' is {version}, but changelog contains higher version {highest}"
    )]
    VersionBehindChangelog {
        /// The declared `version` value.
        version: String,
        /// The highest changelog key.
        highest: String,
    },

    /// The declared version is newer than every changelog entry and not listed.
    #[error("Version {version} is newer than any version documented in changelog")]
    VersionAheadOfChangelog {
        /// The declared `version` value.
        version: String,
    },
}

impl Error {
    /// Whether this error came from reading or decoding the file rather than
    /// from a metadata check.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Parse(_))
    }
}

/// A specialized Result type for `JsonCheck` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_quote_versions() {
        let err = Error::VersionBehindChangelog {
            version: "1.2.0".to_string(),
            highest: "1.3.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Version mismatch: 'version' is 1.2.0, but changelog contains higher version 1.3.0"
        );

        let err = Error::InvalidVersionFormat {
            version: "1.02".to_string(),
        };
        assert!(err.to_string().contains("'1.02'"));
    }

    #[test]
    fn test_parse_error_grouping() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::from(json_err).is_parse_error());
        assert!(Error::from(std::io::Error::from(std::io::ErrorKind::NotFound)).is_parse_error());
        assert!(!Error::MissingVersionField.is_parse_error());
    }
}
