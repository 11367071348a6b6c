use dioxus::prelude::*;

use crate::{client::model::delete_notice::DeleteNotice, model::api::FieldErrorDto};

/// Messages returned by the API for one form field.
#[component]
pub fn FieldMessage(field: &'static str, errors: Vec<FieldErrorDto>) -> Element {
    rsx!(
        for error in errors.into_iter().filter(|e| e.field == field) {
            p {
                class: "text-error text-sm mt-1",
                "{error.message}"
            }
        }
    )
}

/// Form-level message shown above the fields.
#[component]
pub fn ValidationSummary(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div {
                class: "alert alert-error mb-4",
                span { "{message}" }
            }
        }
    )
}

/// Explains why the previous delete attempt did not go through.
#[component]
pub fn DeleteNoticeAlert(notice: DeleteNotice) -> Element {
    rsx!(
        if let Some(message) = notice.message() {
            div {
                class: "alert alert-warning mb-4",
                span { "{message}" }
            }
        }
    )
}
