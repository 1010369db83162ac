//! Batch validation over a list of files
//!
//! Files are checked strictly in the order given. Each outcome is handed to
//! the callback as soon as it is known and then dropped, so only the running
//! exit status is kept between files.

use std::path::Path;

use super::types::{ExitStatus, FileOutcomeCallback};
use super::validation::Validator;

impl Validator {
    /// Check every path in order and fold the outcomes into one status
    ///
    /// A failing file never stops the batch.
    ///
    /// # Arguments
    /// * `paths` - Files to check, in the order they should be reported
    ///
    /// # Returns
    /// [`ExitStatus::Fail`] if any file failed, otherwise [`ExitStatus::Pass`]
    #[must_use]
    pub fn validate_batch<I, P>(&self, paths: I) -> ExitStatus
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.validate_batch_with_callback(paths, &|_| {})
    }

    /// Check every path in order, reporting each outcome to `on_outcome`
    ///
    /// # Arguments
    /// * `paths` - Files to check, in the order they should be reported
    /// * `on_outcome` - Called once per file, before the next file is read
    ///
    /// # Returns
    /// The folded status of every outcome
    #[must_use]
    pub fn validate_batch_with_callback<I, P>(
        &self,
        paths: I,
        on_outcome: FileOutcomeCallback,
    ) -> ExitStatus
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let (checked, status) =
            paths
                .into_iter()
                .fold((0usize, ExitStatus::Pass), |(checked, status), path| {
                    let outcome = self.check(path.as_ref());
                    on_outcome(&outcome);
                    (checked + 1, status.combine(outcome.status()))
                });

        tracing::debug!(checked, ?status, mode = self.mode().as_str(), "batch complete");
        status
    }
}
