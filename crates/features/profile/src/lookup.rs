use crate::error::{ProfileError, ProfileErrorExt};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tubeform_domain::config::{LookupConfig, LookupFailurePolicy};
use tubeform_domain::constants::messages;
use tubeform_forms::{AsyncRule, AsyncVerdict};

/// Directory of registered users, queried by email.
#[async_trait]
pub trait EmailDirectory: Send + Sync {
    /// Number of users registered with `email`.
    async fn matches(&self, email: &str) -> Result<usize, ProfileError>;
}

/// Queries `GET {endpoint}?email=<address>` and counts the users in the JSON array it returns.
#[derive(Debug, Clone)]
pub struct HttpEmailDirectory {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEmailDirectory {
    /// # Errors
    /// [`ProfileError::Lookup`] if the HTTP client cannot be created.
    pub fn new(config: &LookupConfig) -> Result<Self, ProfileError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().context("Building lookup client")?;

        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailDirectory for HttpEmailDirectory {
    async fn matches(&self, email: &str) -> Result<usize, ProfileError> {
        let users: Vec<Value> = self
            .client
            .get(&self.endpoint)
            .query(&[("email", email)])
            .send()
            .await
            .context("Sending lookup request")?
            .error_for_status()
            .context("Lookup endpoint refused the request")?
            .json()
            .await
            .context("Decoding lookup response")?;

        Ok(users.len())
    }
}

/// Asynchronous rule: the address must not be registered yet.
///
/// A lookup that fails is decided by the configured [`LookupFailurePolicy`].
pub struct EmailAvailability {
    directory: Arc<dyn EmailDirectory>,
    on_error: LookupFailurePolicy,
}

impl EmailAvailability {
    pub fn new(directory: Arc<dyn EmailDirectory>, on_error: LookupFailurePolicy) -> Self {
        Self { directory, on_error }
    }
}

impl std::fmt::Debug for EmailAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailAvailability").field("on_error", &self.on_error).finish_non_exhaustive()
    }
}

#[async_trait]
impl AsyncRule for EmailAvailability {
    async fn check(&self, value: Value) -> AsyncVerdict {
        let Some(email) = value.as_str() else {
            return AsyncVerdict::Errored(messages::EMAIL_UNVERIFIED.into());
        };

        match self.directory.matches(email).await {
            Ok(0) => AsyncVerdict::Pass,
            Ok(count) => {
                tracing::debug!(count, "Email already registered");
                AsyncVerdict::Fail(messages::EMAIL_TAKEN.into())
            },
            Err(err) => {
                tracing::warn!(error = %err, policy = ?self.on_error, "Email lookup failed");
                match self.on_error {
                    LookupFailurePolicy::Reject => AsyncVerdict::Errored(messages::EMAIL_UNVERIFIED.into()),
                    LookupFailurePolicy::Accept => AsyncVerdict::Pass,
                }
            },
        }
    }
}
