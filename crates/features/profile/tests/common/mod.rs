#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tubeform_domain::config::{AppConfig, LookupFailurePolicy, ValidationMode};
use tubeform_forms::FieldPath;
use tubeform_profile::{EmailDirectory, ProfileError, ProfileForm, build_form_with};

pub const REGISTERED: &str = "bruce@wayne.com";

/// In-memory directory with one registered address.
#[derive(Debug, Default)]
pub struct Registered {
    calls: AtomicUsize,
}

impl Registered {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailDirectory for Registered {
    async fn matches(&self, email: &str) -> Result<usize, ProfileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(usize::from(email == REGISTERED))
    }
}

/// Directory whose backend cannot be reached.
#[derive(Debug, Default)]
pub struct Unreachable;

#[async_trait]
impl EmailDirectory for Unreachable {
    async fn matches(&self, _email: &str) -> Result<usize, ProfileError> {
        Err("connection refused".into())
    }
}

pub fn config(mode: ValidationMode, on_error: LookupFailurePolicy) -> AppConfig {
    let mut config = AppConfig::default();
    config.form.mode = mode;
    config.lookup.on_error = on_error;
    config
}

pub fn profile(directory: Arc<dyn EmailDirectory>) -> ProfileForm {
    build_form_with(&config(ValidationMode::OnBlur, LookupFailurePolicy::Reject), directory).unwrap()
}

pub fn at(path: &str) -> FieldPath {
    FieldPath::parse(path).unwrap()
}

/// Types a valid value into every required field.
pub fn fill(form: &mut ProfileForm) {
    for (path, text) in [
        ("email", "dick@grayson.io"),
        ("channel", "codevolution"),
        ("social.twitter", "@codevolution"),
        ("phoneNumbers.0", "5550100"),
        ("phoneNumbers.1", "5550199"),
        ("age", "31"),
        ("dob", "1990-04-01"),
    ] {
        let _ = form.input(path, text).unwrap();
    }
}
