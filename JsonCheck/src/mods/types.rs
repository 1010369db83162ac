//! Types for per-file results and the batch exit status

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Reserved file name suffix that enables mod metadata checks
pub const MOD_SUFFIX: &str = "mod.json";

/// Callback invoked with each file's outcome as soon as it is known
pub type FileOutcomeCallback<'a> = &'a dyn Fn(&FileOutcome);

/// Which checks a file receives, decided by its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Any other JSON file: only needs to parse
    Plain,
    /// File name ends with `mod.json` (e.g. `custom_mod.json`)
    ModSuffixed,
    /// File name is exactly `mod.json`; also requires a `changelog` object
    ModManifest,
}

impl FileKind {
    /// Classify a path by its final component
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let Some(name) = path.file_name() else {
            return Self::Plain;
        };
        let name = name.to_string_lossy();

        if name == MOD_SUFFIX {
            Self::ModManifest
        } else if name.ends_with(MOD_SUFFIX) {
            Self::ModSuffixed
        } else {
            Self::Plain
        }
    }

    /// Whether version/changelog cross-checks apply
    #[must_use]
    pub fn is_mod_metadata(self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Whether a `changelog` object is mandatory
    #[must_use]
    pub fn requires_changelog(self) -> bool {
        matches!(self, Self::ModManifest)
    }
}

/// Result of checking a single file
#[derive(Debug)]
pub struct FileOutcome {
    /// The path as given on the command line
    pub path: PathBuf,
    /// `Ok` if every check passed, otherwise the first failure
    pub result: Result<(), Error>,
}

impl FileOutcome {
    /// Create an outcome for a path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, result: Result<(), Error>) -> Self {
        Self {
            path: path.into(),
            result,
        }
    }

    /// Whether the file passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Get the status this outcome contributes to the batch
    #[must_use]
    pub fn status(&self) -> ExitStatus {
        if self.passed() {
            ExitStatus::Pass
        } else {
            ExitStatus::Fail
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "✅ {}", self.path.display()),
            Err(e) => write!(f, "❌ {}: {e}", self.path.display()),
        }
    }
}

/// Aggregate result of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file passed
    #[default]
    Pass,
    /// At least one file failed
    Fail,
}

impl ExitStatus {
    /// Fold another status into this one. `Fail` is sticky.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        if self == Self::Fail || other == Self::Fail {
            Self::Fail
        } else {
            Self::Pass
        }
    }

    /// Process exit code for this status
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Pass => 0,
            Self::Fail => 1,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Pass => Self::SUCCESS,
            ExitStatus::Fail => Self::FAILURE,
        }
    }
}
