//! Per-file validation of relaxed JSON and mod metadata

use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::formats::read_relaxed_json;

use super::fields::{validate_changelog_field, validate_mod_ver, validate_version_field};
use super::types::{FileKind, FileOutcome};
use super::version::VersionParsingMode;

/// Checks files one at a time under a fixed version parsing mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: VersionParsingMode,
}

impl Validator {
    /// Create a validator using the given version parsing mode
    #[must_use]
    pub fn new(mode: VersionParsingMode) -> Self {
        Self { mode }
    }

    /// The version parsing mode in use
    #[must_use]
    pub fn mode(&self) -> VersionParsingMode {
        self.mode
    }

    /// Read, parse and check one file
    ///
    /// # Errors
    /// Returns the first failure: an IO or parse error, or a metadata check
    /// error for `mod.json`-named files.
    pub fn validate_file(&self, path: &Path) -> Result<()> {
        let kind = FileKind::from_path(path);
        tracing::debug!(path = %path.display(), ?kind, "validating");

        let doc = read_relaxed_json(path)?;
        self.validate_document(&doc, kind)
    }

    /// Run the checks for `kind` on an already parsed document
    ///
    /// # Errors
    /// Returns the first metadata check that fails.
    pub fn validate_document(&self, doc: &Value, kind: FileKind) -> Result<()> {
        if kind.is_mod_metadata() {
            validate_version_field(doc)?;
            validate_mod_ver(doc, self.mode)?;
            if kind.requires_changelog() {
                validate_changelog_field(doc)?;
            }
        }
        Ok(())
    }

    /// Check one file and wrap the result with its path
    #[must_use]
    pub fn check(&self, path: &Path) -> FileOutcome {
        let result = self.validate_file(path);
        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), error = %e, "validation failed");
        }
        FileOutcome::new(path, result)
    }
}
