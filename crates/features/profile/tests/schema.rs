mod common;

use common::{REGISTERED, Registered, Unreachable, at, config, fill, profile};
use serde_json::json;
use std::sync::Arc;
use tubeform_domain::config::{LookupFailurePolicy, ValidationMode};
use tubeform_domain::constants::messages;
use tubeform_forms::{ErrorKind, FieldErrors, FormError, SetValueOptions};
use tubeform_profile::{ProfileForm, build_form_with, log_rejection, log_submission};

async fn validate(form: &mut ProfileForm, path: &str, text: &str) {
    let _ = form.input(path, text).unwrap();
    if let Some(check) = form.blur(path).unwrap() {
        let resolution = check.run().await;
        form.resolve(resolution);
    }
}

#[tokio::test]
async fn empty_submission_reports_every_required_field() {
    let mut form = profile(Arc::new(Registered::default()));
    let mut errors = FieldErrors::new();

    let accepted = form
        .submit(|_| panic!("nothing was filled in"), |rejected| errors = rejected.clone())
        .await
        .unwrap();

    assert!(!accepted);
    assert_eq!(errors[&at("email")].message, messages::EMAIL_REQUIRED);
    assert_eq!(errors[&at("channel")].message, messages::CHANNEL_REQUIRED);
    assert_eq!(errors[&at("phoneNumbers.0")].message, messages::PHONE_REQUIRED);
    assert_eq!(errors[&at("phoneNumbers.1")].message, messages::PHONE_REQUIRED);
    assert_eq!(errors.len(), 4, "username, age and dob have valid defaults; twitter is disabled");
}

#[tokio::test]
async fn reserved_address_is_rejected() {
    let mut form = profile(Arc::new(Registered::default()));
    validate(&mut form, "email", "admin@example.com").await;

    let error = form.error("email").unwrap();
    assert_eq!(error.kind, ErrorKind::Custom("notAdmin".into()));
    assert_eq!(error.message, messages::EMAIL_RESERVED);
}

#[tokio::test]
async fn blocked_domain_is_rejected() {
    let mut form = profile(Arc::new(Registered::default()));
    validate(&mut form, "email", "joker@baddomain.com").await;

    let error = form.error("email").unwrap();
    assert_eq!(error.kind, ErrorKind::Custom("notBlackListed".into()));
    assert_eq!(error.message, messages::EMAIL_DOMAIN);
}

#[tokio::test]
async fn malformed_address_never_reaches_the_directory() {
    let directory = Arc::new(Registered::default());
    let mut form = profile(directory.clone());
    validate(&mut form, "email", "abc").await;

    assert_eq!(form.error("email").unwrap().kind, ErrorKind::Pattern);
    assert_eq!(form.error("email").unwrap().message, messages::EMAIL_FORMAT);
    assert_eq!(directory.calls(), 0);
}

#[tokio::test]
async fn registered_address_is_taken() {
    let directory = Arc::new(Registered::default());
    let mut form = profile(directory.clone());
    validate(&mut form, "email", REGISTERED).await;

    let error = form.error("email").unwrap();
    assert_eq!(error.kind, ErrorKind::AsyncFailed("emailAvailable".into()));
    assert_eq!(error.message, messages::EMAIL_TAKEN);
    assert_eq!(directory.calls(), 1);

    validate(&mut form, "email", "alfred@wayne.com").await;
    assert!(form.error("email").is_none());
}

#[tokio::test]
async fn unreachable_directory_follows_the_failure_policy() {
    let mut strict =
        build_form_with(&config(ValidationMode::OnBlur, LookupFailurePolicy::Reject), Arc::new(Unreachable)).unwrap();
    validate(&mut strict, "email", "alfred@wayne.com").await;
    let error = strict.error("email").unwrap();
    assert_eq!(error.kind, ErrorKind::AsyncErrored("emailAvailable".into()));
    assert_eq!(error.message, messages::EMAIL_UNVERIFIED);

    let mut lenient =
        build_form_with(&config(ValidationMode::OnBlur, LookupFailurePolicy::Accept), Arc::new(Unreachable)).unwrap();
    validate(&mut lenient, "email", "alfred@wayne.com").await;
    assert!(lenient.error("email").is_none());
}

#[tokio::test]
async fn phone_numbers_are_digits_only() {
    let mut form = profile(Arc::new(Registered::default()));

    validate(&mut form, "phoneNumbers.0", "12a3").await;
    assert_eq!(form.error("phoneNumbers.0").unwrap().message, messages::PHONE_DIGITS);

    validate(&mut form, "phoneNumbers.0", "12345").await;
    assert!(form.error("phoneNumbers.0").is_none());
}

#[test]
fn phone_list_keeps_its_first_entry() {
    let mut form = profile(Arc::new(Registered::default()));
    assert_eq!(form.entries("phNumbers").unwrap().len(), 1);

    let second = form.append_default("phNumbers").unwrap();
    let third = form.append_default("phNumbers").unwrap();
    assert_eq!(form.value("phNumbers.2").unwrap(), &json!({ "number": "" }));

    form.remove("phNumbers", second.index).unwrap();
    let ids: Vec<String> = form.entries("phNumbers").unwrap().into_iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[1], third.id);

    form.remove("phNumbers", 1).unwrap();
    assert!(matches!(form.remove("phNumbers", 0), Err(FormError::ArrayBounds { .. })));
}

#[test]
fn set_values_button_marks_username_dirty_and_invalid() {
    let mut form = profile(Arc::new(Registered::default()));

    let check = form.set_value("username", json!(""), SetValueOptions::all()).unwrap();
    assert!(check.is_none());

    assert!(form.state().is_dirty);
    assert_eq!(form.error("username").unwrap().message, messages::USERNAME_REQUIRED);
}

#[test]
fn twitter_is_required_only_with_a_channel() {
    let mut form = profile(Arc::new(Registered::default()));
    assert!(form.binding("social.twitter").unwrap().disabled);

    let _ = form.input("channel", "codevolution").unwrap();
    let _ = form.trigger("social.twitter").unwrap();
    assert!(!form.binding("social.twitter").unwrap().disabled);
    assert_eq!(form.error("social.twitter").unwrap().message, messages::TWITTER_REQUIRED);

    let _ = form.input("channel", "").unwrap();
    assert!(form.error("social.twitter").is_none());
}

#[tokio::test]
async fn cleared_age_and_date_are_missing() {
    let mut form = profile(Arc::new(Registered::default()));

    validate(&mut form, "age", "").await;
    assert_eq!(form.error("age").unwrap().message, messages::AGE_REQUIRED);

    validate(&mut form, "dob", "").await;
    assert_eq!(form.error("dob").unwrap().message, messages::DOB_REQUIRED);

    validate(&mut form, "dob", "2001-02-03").await;
    assert!(form.error("dob").is_none());
}

#[tokio::test]
async fn accepted_submission_is_logged_and_the_form_reset() {
    let mut form = profile(Arc::new(Registered::default()));
    fill(&mut form);
    let _ = form.append("phNumbers", json!({ "number": "5550142" })).unwrap();
    let mut submitted = None;

    let accepted = form
        .submit(
            |record| {
                log_submission(&record);
                submitted = Some(record);
            },
            log_rejection,
        )
        .await
        .unwrap();

    assert!(accepted);
    let record = submitted.unwrap();
    assert_eq!(record.email, "dick@grayson.io");
    assert_eq!(record.phone_numbers, ["5550100".to_owned(), "5550199".to_owned()]);
    assert_eq!(record.ph_numbers.len(), 2);
    assert!((record.age - 31.0).abs() < f64::EPSILON);
    assert_eq!(record.dob, chrono::NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());

    let reset = form.record().unwrap();
    assert_eq!(reset.username, "Batman");
    assert_eq!(reset.email, "");
    assert_eq!(reset.ph_numbers.len(), 1);
    assert!(form.errors().is_empty());
    assert!(!form.state().is_dirty);
}
