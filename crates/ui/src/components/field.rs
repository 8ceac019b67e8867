use super::after_update;
use dioxus::prelude::*;
use tubeform_profile::ProfileForm;

/// Labeled input bound to one field, with its error underneath.
#[component]
pub(super) fn FormField(
    form: Signal<ProfileForm>,
    path: &'static str,
    id: &'static str,
    label: &'static str,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    let mut form = form;
    let binding = match form.read().binding(path) {
        Ok(binding) => binding,
        Err(err) => {
            tracing::warn!(error = %err, "Cannot bind field");
            return rsx! {};
        },
    };

    rsx! {
        div { class: "form-control",
            label { r#for: id, "{label}" }
            input {
                r#type: kind,
                id,
                name: "{binding.name}",
                value: "{binding.text}",
                disabled: binding.disabled,
                oninput: move |event: FormEvent| {
                    let result = form.write().input(path, &event.value());
                    after_update(form, result);
                },
                onblur: move |_| {
                    let result = form.write().blur(path);
                    after_update(form, result);
                },
            }
            if binding.pending {
                p { class: "pending", "Checking..." }
            }
            if let Some(error) = &binding.error {
                p { class: "error", "{error.message}" }
            }
        }
    }
}
