//! # Profile
//!
//! The profile form: its rules on top of [`tubeform_forms`], the email
//! availability lookup and the sinks for submitted and rejected data.
//!
//! ```rust,no_run
//! use tubeform_domain::config::AppConfig;
//!
//! let form = tubeform_profile::build_form(&AppConfig::default()).unwrap();
//! assert_eq!(form.entries("phNumbers").unwrap().len(), 1);
//! ```

mod error;
mod lookup;
mod schema;
mod sink;

pub use crate::error::{ProfileError, ProfileErrorExt};
pub use crate::lookup::{EmailAvailability, EmailDirectory, HttpEmailDirectory};
pub use crate::schema::{
    DIGITS_PATTERN, EMAIL_PATTERN, ProfileForm, RULE_EMAIL_AVAILABLE, RULE_NOT_ADMIN, RULE_NOT_BLACKLISTED,
    build_form, build_form_with, channel_is_empty,
};
pub use crate::sink::{log_rejection, log_submission, log_values};
