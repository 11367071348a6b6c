use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        app::SITE_NAME,
        component::{Page, ValidationSummary},
        router::Route,
    },
    model::{api::FieldErrorDto, course::CreateCourseDto},
};

use super::form::{parse_credits, CourseFormFields};

#[cfg(feature = "web")]
use crate::client::api::course::create_course;

#[component]
pub fn CreateCourse() -> Element {
    let nav = navigator();
    let title = use_signal(String::new);
    let credits = use_signal(|| "0".to_string());
    let department_id = use_signal(|| None::<i32>);
    let mut field_errors = use_signal(Vec::<FieldErrorDto>::new);
    let mut summary = use_signal(|| None::<String>);
    let mut submission = use_signal(|| None::<CreateCourseDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            match submission() {
                Some(payload) => Some(create_course(payload).await),
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
                        tracing::error!("Failed to create course: {}", err);
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
        Title { "Create Course | {SITE_NAME}" }
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
                                summary.set(None);
                                field_errors.set(Vec::new());
                                submission.set(Some(CreateCourseDto {
                                    title: title(),
                                    credits,
                                    department_id: department_id(),
                                }));
                            }
                            Err(err) => field_errors.set(vec![err]),
                        }
                    },
                    h1 { class: "card-title", "Create Course" }
                    ValidationSummary { message: summary() }
                    CourseFormFields { title, credits, department_id, field_errors: field_errors() }
                    div {
                        class: "card-actions mt-4",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            "Create"
                        }
                        Link { to: Route::Courses {}, class: "btn btn-ghost", "Back to List" }
                    }
                }
            }
        }
    }
}
