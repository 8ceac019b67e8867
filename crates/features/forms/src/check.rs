use crate::field_error::{ErrorKind, FieldError};
use crate::path::FieldPath;
use crate::rules::{AsyncVerdict, NamedAsyncRule};
use serde_json::Value;
use std::borrow::Cow;

/// An asynchronous rule waiting to run.
///
/// Owns the rule handle and a copy of the value, so it can be awaited after the
/// controller borrow that produced it has ended. Hand the result back through
/// [`crate::FormController::resolve`].
#[derive(Debug)]
#[must_use = "An unresolved check leaves the field pending"]
pub struct PendingCheck {
    pub(crate) path: FieldPath,
    pub(crate) generation: u64,
    pub(crate) value: Value,
    pub(crate) rule: NamedAsyncRule,
}

impl PendingCheck {
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn run(self) -> CheckResolution {
        let Self { path, generation, value, rule } = self;
        tracing::debug!(field = %path, rule = %rule.name, generation, "Running async check");
        let verdict = rule.rule.check(value).await;
        CheckResolution { path, generation, rule: rule.name, verdict }
    }
}

/// Outcome of a [`PendingCheck`], tagged with the generation it was issued for.
#[derive(Debug, Clone)]
pub struct CheckResolution {
    pub(crate) path: FieldPath,
    pub(crate) generation: u64,
    pub(crate) rule: Cow<'static, str>,
    pub(crate) verdict: AsyncVerdict,
}

impl CheckResolution {
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    pub const fn verdict(&self) -> &AsyncVerdict {
        &self.verdict
    }

    pub(crate) fn into_error(self) -> Option<FieldError> {
        match self.verdict {
            AsyncVerdict::Pass => None,
            AsyncVerdict::Fail(message) => Some(FieldError::new(ErrorKind::AsyncFailed(self.rule), message)),
            AsyncVerdict::Errored(message) => Some(FieldError::new(ErrorKind::AsyncErrored(self.rule), message)),
        }
    }
}
