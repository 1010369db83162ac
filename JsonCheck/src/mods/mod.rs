//! Mod metadata validation for relaxed JSON files
//!
//! This module provides the checks run by the `json-check` hook:
//! - Parse every file as relaxed JSON
//! - Require a `version` field in files named `*mod.json`
//! - Cross-check `version` against the highest `changelog` key
//! - Require a `changelog` object in files named exactly `mod.json`

pub mod batch_validate;
pub mod fields;
pub mod types;
pub mod validation;
pub mod version;

pub use fields::{
    highest_changelog_version, validate_changelog_field, validate_mod_ver, validate_version_field,
};
pub use types::{ExitStatus, FileKind, FileOutcome, FileOutcomeCallback, MOD_SUFFIX};
pub use validation::Validator;
pub use version::{Segment, VersionParsingMode, VersionTuple};
