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
    model::{api::FieldErrorDto, course::UpdateCourseDto},
};

use super::form::{parse_credits, CourseFormFields};

#[cfg(feature = "web")]
use crate::client::api::course::{get_course, update_course};

/// Edit form for a course.
///
/// Keeps the row version read with the course. When the save loses a concurrency
/// race the form stays filled with the user's values, shows the current stored values
/// next to each field, and adopts the fresh row version so a second save goes through.
#[component]
pub fn EditCourse(id: i32) -> Element {
    let nav = navigator();
    let mut title = use_signal(String::new);
    let mut credits = use_signal(String::new);
    let mut department_id = use_signal(|| None::<i32>);
    let mut row_version = use_signal(|| None::<i32>);
    let mut load_error = use_signal(|| None::<ApiError>);
    let mut field_errors = use_signal(Vec::<FieldErrorDto>::new);
    let mut summary = use_signal(|| None::<String>);
    let mut submission = use_signal(|| None::<UpdateCourseDto>);

    #[cfg(feature = "web")]
    {
        let course = use_resource(move || async move { get_course(id).await });

        use_effect(move || match course.read_unchecked().as_ref() {
            Some(Ok(details)) => {
                if row_version.peek().is_none() {
                    title.set(details.course.title.clone());
                    credits.set(details.course.credits.to_string());
                    department_id.set(details.course.department_id);
                    row_version.set(Some(details.course.row_version));
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch course {}: {}", id, err);
                load_error.set(Some(err.clone()));
            }
            None => (),
        });

        let future = use_resource(move || async move {
            match submission() {
                Some(payload) => Some(update_course(id, payload).await),
                None => None,
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        nav.push(Route::Courses {});
                    }
                    Err(err) => {
                        if err.is_conflict() {
                            tracing::info!("Edit of course {} conflicted: {}", id, err);
                        } else {
                            tracing::error!("Failed to update course {}: {}", id, err);
                        }
                        summary.set(Some(err.message.clone()));
                        field_errors.set(err.field_errors.clone());
                        if let Some(fresh) = err.row_version {
                            row_version.set(Some(fresh));
                        }
                        submission.set(None);
                    }
                }
            }
        });
    }

    let is_submitting = submission.read().is_some();

    rsx! {
        Title { "Edit Course | {SITE_NAME}" }
        if let Some(err) = load_error() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(current_version) = row_version() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-3xl card bg-base-200",
                    form {
                        class: "card-body",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            match parse_credits(&credits()) {
                                Ok(credits) => {
                                    field_errors.set(Vec::new());
                                    submission.set(Some(UpdateCourseDto {
                                        title: title(),
                                        credits,
                                        department_id: department_id(),
                                        row_version: current_version,
                                    }));
                                }
                                Err(err) => field_errors.set(vec![err]),
                            }
                        },
                        h1 { class: "card-title", "Edit Course" }
                        ValidationSummary { message: summary() }
                        div {
                            class: "form-control w-full",
                            label { class: "label", span { class: "label-text", "Number" } }
                            p { class: "px-1", "{id}" }
                        }
                        CourseFormFields { title, credits, department_id, field_errors: field_errors() }
                        div {
                            class: "card-actions mt-4",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_submitting,
                                "Save"
                            }
                            Link { to: Route::Courses {}, class: "btn btn-ghost", "Back to List" }
                        }
                    }
                }
            }
        } else {
            LoadingPage { }
        }
    }
}
