#![allow(dead_code)]

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tubeform_forms::{
    AsyncRule, AsyncVerdict, FieldArray, FieldPath, FormBuilder, FormController, Rules, ValidationMode, async_trait,
};

pub const TAKEN: &str = "taken@example.io";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub channel: String,
    pub social: Social,
    pub age: f64,
    pub phones: Vec<Phone>,
}

impl Default for Signup {
    fn default() -> Self {
        Self {
            username: "Batman".into(),
            email: String::new(),
            channel: String::new(),
            social: Social { twitter: String::new() },
            age: 0.0,
            phones: vec![Phone { number: String::new() }],
        }
    }
}

/// Rejects one known address.
pub struct Directory;

#[async_trait]
impl AsyncRule for Directory {
    async fn check(&self, value: Value) -> AsyncVerdict {
        if value == TAKEN { AsyncVerdict::Fail("Email exists".into()) } else { AsyncVerdict::Pass }
    }
}

/// Lookup that never reaches its backend.
pub struct Offline;

#[async_trait]
impl AsyncRule for Offline {
    async fn check(&self, _value: Value) -> AsyncVerdict {
        AsyncVerdict::Errored("Unable to verify email address".into())
    }
}

pub fn digits() -> Regex {
    Regex::new("^[0-9]+$").unwrap()
}

pub fn builder(mode: ValidationMode, lookup: Arc<dyn AsyncRule>) -> FormBuilder<Signup> {
    FormController::builder(Signup::default())
        .mode(mode)
        .field("username", Rules::new().required("Username is required"))
        .field(
            "email",
            Rules::new()
                .required("Email is required")
                .pattern(Regex::new(r"^[^@\s]+@[^@\s]+\.[a-z]+$").unwrap(), "Invalid email format")
                .validate_async("available", lookup),
        )
        .field("channel", Rules::new().required("Channel is required"))
        .field(
            "social.twitter",
            Rules::new()
                .disabled_when(|record| record["channel"] == "")
                .required("Enter twitter profile"),
        )
        .field("age", Rules::new().numeric().required("Age is required"))
        .field_array(
            "phones",
            FieldArray::new(serde_json::json!({ "number": "" })).min_len(1).field(
                "number",
                Rules::new().required("Phone number is required").pattern(digits(), "Number only"),
            ),
        )
}

pub fn signup_with(mode: ValidationMode, lookup: Arc<dyn AsyncRule>) -> FormController<Signup> {
    builder(mode, lookup).build().unwrap()
}

pub fn signup(mode: ValidationMode) -> FormController<Signup> {
    signup_with(mode, Arc::new(Directory))
}

pub fn at(path: &str) -> FieldPath {
    FieldPath::parse(path).unwrap()
}

/// Fills every required field with a valid value.
pub fn fill(form: &mut FormController<Signup>) {
    let _ = form.input("email", "robin@example.io").unwrap();
    let _ = form.input("channel", "codevolution").unwrap();
    let _ = form.input("social.twitter", "@codevolution").unwrap();
    let _ = form.input("phones.0.number", "5550100").unwrap();
}
