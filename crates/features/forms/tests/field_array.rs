mod common;

use common::{at, signup};
use serde_json::json;
use tubeform_forms::{ErrorKind, FormError, ValidationMode};

#[test]
fn list_starts_with_one_entry() {
    let form = signup(ValidationMode::OnBlur);
    let entries = form.entries("phones").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index, 0);
    assert_eq!(entries[0].id.len(), 10);
}

#[test]
fn append_default_adds_a_blank_entry() {
    let mut form = signup(ValidationMode::OnBlur);

    let entry = form.append_default("phones").unwrap();
    assert_eq!(entry.index, 1);
    assert_eq!(form.value("phones.1").unwrap(), &json!({ "number": "" }));

    let entries = form.entries("phones").unwrap();
    assert_eq!(entries.len(), 2);
    assert_ne!(entries[0].id, entries[1].id);
    assert_eq!(entries[1].id, entry.id);
    assert!(form.state().is_dirty);
}

#[test]
fn appended_entries_get_item_rules() {
    let mut form = signup(ValidationMode::OnBlur);
    let _ = form.append("phones", json!({ "number": "12a3" })).unwrap();

    let _ = form.trigger("phones.1.number").unwrap();
    assert_eq!(form.error("phones.1.number").unwrap().message, "Number only");

    let _ = form.blur("phones.1.number").unwrap();
    let _ = form.input("phones.1.number", "123").unwrap();
    assert!(form.error("phones.1.number").is_none());
}

#[test]
fn removal_keeps_identity_of_later_entries() {
    let mut form = signup(ValidationMode::OnBlur);
    let _ = form.append_default("phones").unwrap();
    let _ = form.append_default("phones").unwrap();
    let before = form.entries("phones").unwrap();

    let _ = form.input("phones.2.number", "12x").unwrap();
    let _ = form.blur("phones.2.number").unwrap();
    assert_eq!(form.error("phones.2.number").unwrap().kind, ErrorKind::Pattern);

    form.remove("phones", 1).unwrap();

    let after = form.entries("phones").unwrap();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].id, before[0].id);
    assert_eq!(after[1].id, before[2].id);
    assert_eq!(form.value("phones.1.number").unwrap(), &json!("12x"));
    assert_eq!(form.error("phones.1.number").unwrap().kind, ErrorKind::Pattern);
    assert!(form.binding("phones.1.number").unwrap().touched);
    assert!(!form.errors().contains_key(&at("phones.2.number")));
}

#[test]
fn removal_respects_bounds() {
    let mut form = signup(ValidationMode::OnBlur);

    assert!(matches!(form.remove("phones", 0), Err(FormError::ArrayBounds { .. })));

    let _ = form.append_default("phones").unwrap();
    assert!(matches!(form.remove("phones", 2), Err(FormError::ArrayBounds { .. })));

    form.remove("phones", 1).unwrap();
    assert_eq!(form.entries("phones").unwrap().len(), 1);
    assert!(matches!(form.remove("phones", 0), Err(FormError::ArrayBounds { .. })));
}

#[test]
fn list_operations_need_a_declared_array() {
    let mut form = signup(ValidationMode::OnBlur);
    assert!(matches!(form.append_default("email"), Err(FormError::NotAnArray { .. })));
    assert!(matches!(form.remove("username", 0), Err(FormError::NotAnArray { .. })));
    assert!(matches!(form.entries("age"), Err(FormError::NotAnArray { .. })));
}

#[test]
fn replacing_the_list_regenerates_ids() {
    let mut form = signup(ValidationMode::OnBlur);
    let original = form.entries("phones").unwrap();

    let _ = form
        .set_value(
            "phones",
            json!([{ "number": "1" }, { "number": "2" }, { "number": "3" }]),
            tubeform_forms::SetValueOptions::default(),
        )
        .unwrap();

    let entries = form.entries("phones").unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry.id != original[0].id));
}
