use super::after_update;
use dioxus::prelude::*;
use tubeform_domain::constants::paths;
use tubeform_profile::ProfileForm;

/// The `phNumbers` list. Rows are keyed by entry id; the first row cannot be removed.
#[component]
pub(super) fn PhoneList(form: Signal<ProfileForm>) -> Element {
    let mut form = form;
    let entries = form.read().entries(paths::PHONE_LIST).unwrap_or_default();

    rsx! {
        div {
            label { "List of phone numbers" }
            div {
                for entry in entries {
                    PhoneRow { key: "{entry.id}", form, index: entry.index }
                }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = form.write().append_default(paths::PHONE_LIST) {
                            tracing::warn!(error = %err, "Cannot add phone number");
                        }
                    },
                    "Add phone number"
                }
            }
        }
    }
}

#[component]
fn PhoneRow(form: Signal<ProfileForm>, index: usize) -> Element {
    let mut form = form;
    let path = format!("{}.{index}.{}", paths::PHONE_LIST, paths::PHONE_LIST_NUMBER);
    let text = form.read().binding(&path).map(|binding| binding.text).unwrap_or_default();
    let input_path = path.clone();
    let blur_path = path.clone();

    rsx! {
        div { class: "form-control",
            input {
                r#type: "text",
                name: "{path}",
                value: "{text}",
                oninput: move |event: FormEvent| {
                    let result = form.write().input(&input_path, &event.value());
                    after_update(form, result);
                },
                onblur: move |_| {
                    let result = form.write().blur(&blur_path);
                    after_update(form, result);
                },
            }
            if index > 0 {
                button {
                    class: "remove",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = form.write().remove(paths::PHONE_LIST, index) {
                            tracing::warn!(error = %err, index, "Cannot remove phone number");
                        }
                    },
                    "Remove"
                }
            }
        }
    }
}
