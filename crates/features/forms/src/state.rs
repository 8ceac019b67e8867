use crate::field_error::FieldError;
use crate::path::FieldPath;
use serde::Serialize;

/// Form-level flags, derived from field metadata on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormState {
    pub is_dirty: bool,
    pub is_valid: bool,
    pub is_validating: bool,
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub is_submit_successful: bool,
    pub submit_count: u32,
}

/// Side effects of [`crate::FormController::set_value`]. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SetValueOptions {
    pub should_dirty: bool,
    pub should_touch: bool,
    pub should_validate: bool,
}

impl SetValueOptions {
    /// Dirty, touched and revalidated.
    #[must_use]
    pub const fn all() -> Self {
        Self { should_dirty: true, should_touch: true, should_validate: true }
    }
}

/// Snapshot of everything an input element needs to render one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FieldBinding {
    pub path: FieldPath,
    /// Dotted path, usable as the element's `name`.
    pub name: String,
    /// Current value as input text, or the last typed text when the value does not
    /// render back to it.
    pub text: String,
    pub disabled: bool,
    pub touched: bool,
    pub dirty: bool,
    pub pending: bool,
    /// Hidden while the field is disabled.
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum FieldStatus {
    #[default]
    Unchecked,
    Valid,
    Invalid(FieldError),
    Pending,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FieldMeta {
    pub(crate) touched: bool,
    pub(crate) dirty: bool,
    pub(crate) status: FieldStatus,
    /// Stamp of the last write or validation; async results must carry the same one.
    pub(crate) generation: u64,
    /// Input text the stored value does not render back to, e.g. `3.` for `3`.
    pub(crate) raw: Option<String>,
}

impl FieldMeta {
    /// A new value invalidates any passed or in-flight result. An error stays
    /// visible until the field is validated again.
    pub(crate) fn written(&mut self, generation: u64) {
        self.generation = generation;
        self.raw = None;
        if matches!(self.status, FieldStatus::Valid | FieldStatus::Pending) {
            self.status = FieldStatus::Unchecked;
        }
    }
}
