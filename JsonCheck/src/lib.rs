//! # `JsonCheck`
//!
//! A pre-commit style hook library for validating JSON-with-comments files,
//! with extra checks for mod metadata (`mod.json`) files.
//!
//! ## Checks
//!
//! - **Every file** - must parse as relaxed JSON (comments and trailing commas allowed)
//! - **`*mod.json`** - must declare `version`; if a `changelog` object is present,
//!   `version` must match its newest entry
//! - **`mod.json`** - must also declare a `changelog` object
//!
//! ## Quick Start
//!
//! ```no_run
//! use jsoncheck::prelude::*;
//!
//! let validator = Validator::new(VersionParsingMode::Strict);
//! let status = validator.validate_batch_with_callback(["mod.json", "config.json"], &|outcome| {
//!     println!("{outcome}");
//! });
//! std::process::exit(status.code());
//! ```
//!
//! ### Comparing Versions
//!
//! ```
//! use jsoncheck::mods::{VersionParsingMode, VersionTuple};
//!
//! let strict = VersionParsingMode::Strict;
//! assert!(strict.parse("1.10.0")? > strict.parse("1.9.3")?);
//! assert!(strict.parse("1.02").is_err());
//!
//! let lenient = VersionParsingMode::Lenient;
//! assert_eq!(lenient.parse("v1.02")?, VersionTuple::from([1, 2]));
//! # Ok::<(), jsoncheck::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `cli` module used by the `json-check` binary

pub mod error;
pub mod formats;
pub mod mods;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{parse_relaxed_json, read_relaxed_json};
    pub use crate::mods::{
        ExitStatus, FileKind, FileOutcome, Validator, VersionParsingMode, VersionTuple,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
