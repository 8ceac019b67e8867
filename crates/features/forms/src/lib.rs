//! # Forms
//!
//! A form-state engine: one [`FormController`] owns the value record of a form,
//! the validation rules attached to its fields and everything derived from them
//! (errors, touched/dirty flags, submit status).
//!
//! - Fields are addressed by dotted [`FieldPath`]s (`social.twitter`, `phNumbers.0.number`).
//! - [`Rules`] run in a fixed order: required, pattern, named predicates, then one
//!   asynchronous [`AsyncRule`]. The first failure wins.
//! - [`FieldArray`]s are variable-length lists whose entries carry stable ids.
//! - Asynchronous checks are returned as [`PendingCheck`]s; results that arrive after
//!   the field changed again are discarded.
//!
//! ## Example
//!
//! ```rust
//! use regex::Regex;
//! use serde::{Deserialize, Serialize};
//! use tubeform_forms::{FormController, Rules, SubmitOutcome};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Contact { phone: String }
//!
//! let mut form = FormController::builder(Contact::default())
//!     .field("phone", Rules::new().required("Phone is required").pattern(Regex::new("^[0-9]+$").unwrap(), "Number only"))
//!     .build()
//!     .unwrap();
//!
//! form.input("phone", "12a3").unwrap();
//! let plan = form.begin_submit();
//! let report = futures::executor::block_on(plan.run());
//! let SubmitOutcome::Rejected(errors) = form.finish_submit(report).unwrap() else { panic!() };
//! assert_eq!(errors.values().next().unwrap().message, "Number only");
//! ```

mod array;
mod check;
mod controller;
mod error;
mod field_error;
mod path;
mod rules;
mod state;
mod submit;
mod value;

pub use crate::array::{ArrayEntry, FieldArray};
pub use crate::check::{CheckResolution, PendingCheck};
pub use crate::controller::{FormBuilder, FormController};
pub use crate::error::{FormError, FormErrorExt};
pub use crate::field_error::{ErrorKind, FieldError, FieldErrors};
pub use crate::path::{FieldPath, Segment};
pub use crate::rules::{AsyncRule, AsyncVerdict, RuleResult, Rules};
pub use crate::state::{FieldBinding, FormState, SetValueOptions};
pub use crate::submit::{SubmitOutcome, SubmitPlan, SubmitReport};
pub use crate::value::{Coercion, display_text, is_missing};
pub use async_trait::async_trait;
pub use tubeform_domain::config::ValidationMode;
