use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        app::SITE_NAME,
        component::{
            page::{ErrorPage, LoadingPage},
            Page, ValidationSummary,
        },
        model::error::ApiError,
        router::Route,
    },
    model::{api::FieldErrorDto, instructor::InstructorFormDto},
};

use super::form::{build_instructor_form, InstructorFormFields};

#[cfg(feature = "web")]
use crate::client::api::instructor::{get_instructor, update_instructor};

#[component]
pub fn EditInstructor(id: i32) -> Element {
    let nav = navigator();
    let mut last_name = use_signal(String::new);
    let mut first_mid_name = use_signal(String::new);
    let mut hire_date = use_signal(String::new);
    let mut loaded = use_signal(|| false);
    let mut load_error = use_signal(|| None::<ApiError>);
    let mut field_errors = use_signal(Vec::<FieldErrorDto>::new);
    let mut summary = use_signal(|| None::<String>);
    let mut submission = use_signal(|| None::<InstructorFormDto>);

    #[cfg(feature = "web")]
    {
        let instructor = use_resource(move || async move { get_instructor(id).await });

        use_effect(move || match instructor.read_unchecked().as_ref() {
            Some(Ok(details)) => {
                if !*loaded.peek() {
                    last_name.set(details.instructor.last_name.clone());
                    first_mid_name.set(details.instructor.first_mid_name.clone());
                    hire_date.set(details.instructor.hire_date.format("%Y-%m-%d").to_string());
                    loaded.set(true);
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch instructor {}: {}", id, err);
                load_error.set(Some(err.clone()));
            }
            None => (),
        });

        let future = use_resource(move || async move {
            match submission() {
                Some(payload) => Some(update_instructor(id, payload).await),
                None => None,
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        nav.push(Route::Instructors {});
                    }
                    Err(err) => {
                        tracing::error!("Failed to update instructor {}: {}", id, err);
                        summary.set(Some(err.message.clone()));
                        field_errors.set(err.field_errors.clone());
                        submission.set(None);
                    }
                }
            }
        });
    }

    let is_submitting = submission.read().is_some();

    rsx! {
        Title { "Edit Instructor | {SITE_NAME}" }
        if let Some(err) = load_error() {
            ErrorPage { status: err.status, message: err.message }
        } else if loaded() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-3xl card bg-base-200",
                    form {
                        class: "card-body",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            match build_instructor_form(last_name(), first_mid_name(), &hire_date()) {
                                Ok(payload) => {
                                    field_errors.set(Vec::new());
                                    submission.set(Some(payload));
                                }
                                Err(err) => field_errors.set(vec![err]),
                            }
                        },
                        h1 { class: "card-title", "Edit Instructor" }
                        ValidationSummary { message: summary() }
                        InstructorFormFields { last_name, first_mid_name, hire_date, field_errors: field_errors() }
                        div {
                            class: "card-actions mt-4",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_submitting,
                                "Save"
                            }
                            Link { to: Route::Instructors {}, class: "btn btn-ghost", "Back to List" }
                        }
                    }
                }
            }
        } else {
            LoadingPage { }
        }
    }
}
