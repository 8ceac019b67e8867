use serde_json::Value;
use tubeform_domain::profile::ProfileValues;
use tubeform_forms::FieldErrors;

/// Emits an accepted record. Persistence is handled downstream of the log.
pub fn log_submission(record: &ProfileValues) {
    match serde_json::to_string(record) {
        Ok(json) => tracing::info!(username = %record.username, record = %json, "Form submitted"),
        Err(err) => tracing::error!(error = %err, "Form submitted but the record could not be encoded"),
    }
}

/// Emits the errors of a rejected submission.
pub fn log_rejection(errors: &FieldErrors) {
    for (field, error) in errors {
        tracing::debug!(%field, kind = %error.kind, message = %error.message, "Field rejected");
    }
    tracing::warn!(count = errors.len(), "Form submission rejected");
}

/// Emits a snapshot of selected fields.
pub fn log_values(paths: &[&str], values: &[Value]) {
    let pairs: Vec<String> = paths.iter().zip(values).map(|(path, value)| format!("{path}={value}")).collect();
    tracing::info!(values = %pairs.join(", "), "Get values");
}
