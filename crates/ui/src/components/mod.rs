mod field;
mod phones;
mod profile;

pub use self::profile::ProfilePage;

use dioxus::prelude::*;
use tubeform_forms::{FormError, PendingCheck};
use tubeform_profile::ProfileForm;

/// Root component.
#[component]
pub fn App() -> Element {
    rsx! {
        ProfilePage {}
    }
}

/// Runs the check, if any, and applies its result to the form.
fn spawn_check(form: Signal<ProfileForm>, check: Option<PendingCheck>) {
    let Some(check) = check else { return };
    spawn(async move {
        let mut form = form;
        let resolution = check.run().await;
        if !form.write().resolve(resolution) {
            tracing::trace!("Discarded a stale check");
        }
    });
}

/// Shared tail of every handler that may validate.
fn after_update(form: Signal<ProfileForm>, result: Result<Option<PendingCheck>, FormError>) {
    match result {
        Ok(check) => spawn_check(form, check),
        Err(err) => tracing::warn!(error = %err, "Form update failed"),
    }
}
