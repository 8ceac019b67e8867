use crate::check::{CheckResolution, PendingCheck};
use crate::field_error::FieldErrors;
use futures::future::join_all;

/// Asynchronous work collected by [`crate::FormController::begin_submit`].
#[derive(Debug)]
#[must_use = "Run the plan and pass its report to `finish_submit`"]
pub struct SubmitPlan {
    pub(crate) checks: Vec<PendingCheck>,
    /// Reset count of the controller when the plan was made.
    pub(crate) epoch: u64,
}

impl SubmitPlan {
    /// Number of asynchronous checks the submission waits for.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.checks.len()
    }

    /// Runs every pending check concurrently.
    pub async fn run(self) -> SubmitReport {
        let resolutions = join_all(self.checks.into_iter().map(PendingCheck::run)).await;
        SubmitReport { resolutions, epoch: self.epoch }
    }
}

/// Results of a [`SubmitPlan`].
#[derive(Debug)]
#[must_use = "Pass the report to `finish_submit`"]
pub struct SubmitReport {
    pub(crate) resolutions: Vec<CheckResolution>,
    pub(crate) epoch: u64,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Every active field passed; the decoded record.
    Accepted(T),
    /// At least one field failed or could not be settled.
    Rejected(FieldErrors),
    /// The form was reset while the submission ran; nothing was validated.
    Discarded,
}

impl<T> SubmitOutcome<T> {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}
