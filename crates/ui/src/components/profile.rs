use super::after_update;
use super::field::FormField;
use super::phones::PhoneList;
use dioxus::prelude::*;
use serde_json::Value;
use tubeform_domain::config::AppConfig;
use tubeform_domain::constants::paths;
use tubeform_forms::{SetValueOptions, SubmitOutcome};
use tubeform_profile::{ProfileForm, build_form, log_rejection, log_submission, log_values};

/// Builds the form once per mount from the [`AppConfig`] context.
#[component]
pub fn ProfilePage() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let form = use_hook(|| build_form(&config).map(Signal::new).map_err(|err| err.to_string()));

    match form {
        Ok(form) => rsx! {
            ProfileFields { form }
        },
        Err(message) => {
            tracing::error!(error = %message, "Profile form unavailable");
            rsx! {
                p { class: "error", "Profile form unavailable: {message}" }
            }
        },
    }
}

#[component]
fn ProfileFields(form: Signal<ProfileForm>) -> Element {
    let mut form = form;
    let state = form.read().state();

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let plan = form.write().begin_submit();
        spawn(async move {
            let mut form = form;
            let report = plan.run().await;
            let outcome = form.write().finish_submit(report);
            match outcome {
                Ok(SubmitOutcome::Accepted(record)) => log_submission(&record),
                Ok(SubmitOutcome::Rejected(errors)) => log_rejection(&errors),
                Ok(SubmitOutcome::Discarded) => tracing::debug!("Submission dropped after reset"),
                Err(err) => tracing::error!(error = %err, "Submission failed"),
            }
        });
    };

    rsx! {
        div {
            h1 { "Profile Form" }
            form { novalidate: true, onsubmit,
                FormField { form, path: paths::USERNAME, id: "username", label: "Username" }
                FormField { form, path: paths::EMAIL, id: "email", label: "Email", kind: "email" }
                FormField { form, path: paths::CHANNEL, id: "channel", label: "Channel" }
                FormField { form, path: paths::TWITTER, id: "twitter", label: "Twitter" }
                FormField { form, path: paths::FACEBOOK, id: "facebook", label: "Facebook" }
                FormField { form, path: paths::PRIMARY_PHONE, id: "primary-phone", label: "Primary Phone Number" }
                FormField { form, path: paths::SECONDARY_PHONE, id: "secondary-phone", label: "Secondary Phone Number" }
                PhoneList { form }
                FormField { form, path: paths::AGE, id: "age", label: "Age", kind: "number" }
                FormField { form, path: paths::DOB, id: "dob", label: "Date of birth", kind: "date" }

                div {
                    button { r#type: "submit", disabled: state.is_submitting, "Submit" }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let requested = [paths::EMAIL, paths::CHANNEL];
                            match form.read().get_values(&requested) {
                                Ok(values) => log_values(&requested, &values),
                                Err(err) => tracing::warn!(error = %err, "Cannot read values"),
                            }
                        },
                        "Get Values"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let result = form.write().set_value(
                                paths::USERNAME,
                                Value::String(String::new()),
                                SetValueOptions::all(),
                            );
                            after_update(form, result);
                        },
                        "Set Values"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| form.write().reset(),
                        "Reset"
                    }
                }
            }
        }
    }
}
