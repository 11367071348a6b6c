use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        app::SITE_NAME,
        component::{Page, ValidationSummary},
        router::Route,
    },
    model::{api::FieldErrorDto, instructor::InstructorFormDto},
};

use super::form::{build_instructor_form, InstructorFormFields};

#[cfg(feature = "web")]
use crate::client::api::instructor::create_instructor;

#[component]
pub fn CreateInstructor() -> Element {
    let nav = navigator();
    let last_name = use_signal(String::new);
    let first_mid_name = use_signal(String::new);
    let hire_date = use_signal(String::new);
    let mut field_errors = use_signal(Vec::<FieldErrorDto>::new);
    let mut summary = use_signal(|| None::<String>);
    let mut submission = use_signal(|| None::<InstructorFormDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            match submission() {
                Some(payload) => Some(create_instructor(payload).await),
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
                        tracing::error!("Failed to create instructor: {}", err);
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
        Title { "Create Instructor | {SITE_NAME}" }
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
                                summary.set(None);
                                field_errors.set(Vec::new());
                                submission.set(Some(payload));
                            }
                            Err(err) => field_errors.set(vec![err]),
                        }
                    },
                    h1 { class: "card-title", "Create Instructor" }
                    ValidationSummary { message: summary() }
                    InstructorFormFields { last_name, first_mid_name, hire_date, field_errors: field_errors() }
                    div {
                        class: "card-actions mt-4",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            "Create"
                        }
                        Link { to: Route::Instructors {}, class: "btn btn-ghost", "Back to List" }
                    }
                }
            }
        }
    }
}
