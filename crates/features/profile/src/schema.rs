use crate::error::{ProfileError, ProfileErrorExt};
use crate::lookup::{EmailAvailability, EmailDirectory, HttpEmailDirectory};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::Arc;
use tubeform_domain::config::AppConfig;
use tubeform_domain::constants::{BLOCKED_EMAIL_SUFFIX, RESERVED_EMAIL, messages, paths};
use tubeform_domain::profile::ProfileValues;
use tubeform_forms::{FieldArray, FormController, RuleResult, Rules};

/// The profile form controller.
pub type ProfileForm = FormController<ProfileValues>;

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$";
/// ASCII digits only; `\d` would also admit other scripts' digits.
pub const DIGITS_PATTERN: &str = "^[0-9]+$";

pub const RULE_NOT_ADMIN: &str = "notAdmin";
pub const RULE_NOT_BLACKLISTED: &str = "notBlackListed";
pub const RULE_EMAIL_AVAILABLE: &str = "emailAvailable";

/// Builds the profile form with the HTTP email directory from `config.lookup`.
///
/// # Errors
/// [`ProfileError::Lookup`] if the HTTP client cannot be created, otherwise see
/// [`build_form_with`].
pub fn build_form(config: &AppConfig) -> Result<ProfileForm, ProfileError> {
    let directory = HttpEmailDirectory::new(&config.lookup)?;
    build_form_with(config, Arc::new(directory))
}

/// Builds the profile form on `ProfileValues::default()` using `directory` for the
/// email uniqueness check.
///
/// # Errors
/// [`ProfileError::Pattern`] for a bad built-in pattern, [`ProfileError::Form`] if the
/// schema does not fit the record.
pub fn build_form_with(config: &AppConfig, directory: Arc<dyn EmailDirectory>) -> Result<ProfileForm, ProfileError> {
    let availability = Arc::new(EmailAvailability::new(directory, config.lookup.on_error));
    let mut phone_entry = Map::new();
    phone_entry.insert(paths::PHONE_LIST_NUMBER.to_owned(), Value::String(String::new()));

    let form = FormController::builder(ProfileValues::default())
        .config(&config.form)
        .field(paths::USERNAME, Rules::new().required(messages::USERNAME_REQUIRED))
        .field(
            paths::EMAIL,
            Rules::new()
                .required(messages::EMAIL_REQUIRED)
                .pattern(Regex::new(EMAIL_PATTERN)?, messages::EMAIL_FORMAT)
                .validate(RULE_NOT_ADMIN, not_admin)
                .validate(RULE_NOT_BLACKLISTED, not_blacklisted)
                .validate_async(RULE_EMAIL_AVAILABLE, availability),
        )
        .field(paths::CHANNEL, Rules::new().required(messages::CHANNEL_REQUIRED))
        .field(
            paths::TWITTER,
            Rules::new().disabled_when(channel_is_empty).required(messages::TWITTER_REQUIRED),
        )
        .field(paths::FACEBOOK, Rules::new())
        .field(paths::PRIMARY_PHONE, phone_rules()?)
        .field(paths::SECONDARY_PHONE, phone_rules()?)
        .field_array(paths::PHONE_LIST, FieldArray::new(Value::Object(phone_entry)).min_len(1))
        .field(paths::AGE, Rules::new().numeric().required(messages::AGE_REQUIRED))
        .field(paths::DOB, Rules::new().date().required(messages::DOB_REQUIRED))
        .build()
        .context("Building profile form")?;

    Ok(form)
}

fn phone_rules() -> Result<Rules, ProfileError> {
    Ok(Rules::new()
        .required(messages::PHONE_REQUIRED)
        .pattern(Regex::new(DIGITS_PATTERN)?, messages::PHONE_DIGITS))
}

fn not_admin(value: &Value) -> RuleResult {
    if value == RESERVED_EMAIL { Err(messages::EMAIL_RESERVED.into()) } else { Ok(()) }
}

fn not_blacklisted(value: &Value) -> RuleResult {
    match value.as_str() {
        Some(email) if email.ends_with(BLOCKED_EMAIL_SUFFIX) => Err(messages::EMAIL_DOMAIN.into()),
        _ => Ok(()),
    }
}

/// Twitter is only asked for once a channel is given.
pub fn channel_is_empty(record: &Value) -> bool {
    record.get(paths::CHANNEL).and_then(Value::as_str).is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_pattern_accepts_common_addresses() {
        let email = Regex::new(EMAIL_PATTERN).unwrap();
        assert!(email.is_match("bruce.wayne+cave@wayne-enterprises.com"));
        assert!(email.is_match("robin@localhost"));
        assert!(!email.is_match("abc"));
        assert!(!email.is_match("two@@signs.com"));
        assert!(!email.is_match("space in@name.com"));
    }

    #[test]
    fn reserved_and_blocked_addresses() {
        assert!(not_admin(&json!("admin@example.com")).is_err());
        assert!(not_admin(&json!("alfred@example.com")).is_ok());
        assert!(not_blacklisted(&json!("joker@baddomain.com")).is_err());
        assert!(not_blacklisted(&json!("joker@gooddomain.com")).is_ok());
    }

    #[test]
    fn channel_drives_twitter() {
        assert!(channel_is_empty(&json!({ "channel": "" })));
        assert!(channel_is_empty(&json!({})));
        assert!(!channel_is_empty(&json!({ "channel": "codevolution" })));
    }
}
