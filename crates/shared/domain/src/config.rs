use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Default directory queried for email uniqueness.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub lookup: LookupConfig,
    pub form: FormConfig,
}

/// Arc-wrapped config, cheap to clone into UI contexts and async tasks.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Email uniqueness lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Queried as `GET {endpoint}?email=<value>`; a JSON array is expected back.
    pub endpoint: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    /// What a failed lookup (transport error, bad payload, timeout) means for the field.
    pub on_error: LookupFailurePolicy,
}

/// Verdict applied when the uniqueness of an email cannot be established.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailurePolicy {
    /// The field stays invalid with an "unable to verify" message.
    #[default]
    Reject,
    /// The address is assumed to be available.
    Accept,
}

/// Behaviour of the form controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub mode: ValidationMode,
    /// Restore defaults once a submission has been accepted.
    pub reset_on_success: bool,
}

/// When field-level validation runs outside of a submit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// On blur; afterwards on every change of that field.
    #[default]
    OnBlur,
    /// On every change.
    OnChange,
    /// Only on submit; afterwards on every change.
    OnSubmit,
}

// --- Default ---

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LOOKUP_ENDPOINT.to_owned(),
            timeout_ms: None,
            on_error: LookupFailurePolicy::Reject,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { mode: ValidationMode::OnBlur, reset_on_success: true }
    }
}
