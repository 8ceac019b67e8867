use crate::path::FieldPath;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Which rule rejected a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "rule", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing value.
    Required,
    /// Text did not match the field's pattern.
    Pattern,
    /// A named synchronous predicate failed.
    Custom(Cow<'static, str>),
    /// The asynchronous check answered "no".
    AsyncFailed(Cow<'static, str>),
    /// The asynchronous check could not answer.
    AsyncErrored(Cow<'static, str>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Pattern => f.write_str("pattern"),
            Self::Custom(rule) => write!(f, "custom:{rule}"),
            Self::AsyncFailed(rule) => write!(f, "async_failed:{rule}"),
            Self::AsyncErrored(rule) => write!(f, "async_errored:{rule}"),
        }
    }
}

/// A validation failure shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

/// Errors by field, ordered by path.
pub type FieldErrors = BTreeMap<FieldPath, FieldError>;
