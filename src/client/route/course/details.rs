use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        app::SITE_NAME,
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        model::error::ApiError,
        router::Route,
    },
    model::course::CourseDetailsDto,
};

#[cfg(feature = "web")]
use crate::client::api::course::get_course;

#[component]
pub fn CourseDetails(id: i32) -> Element {
    let mut details = use_signal(|| None::<CourseDetailsDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_course(id).await });

        use_effect(move || match future.read_unchecked().as_ref() {
            Some(Ok(data)) => details.set(Some(data.clone())),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch course {}: {}", id, err);
                error.set(Some(err.clone()));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Course Details | {SITE_NAME}" }
        if let Some(data) = details() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-3xl card bg-base-200",
                    div {
                        class: "card-body",
                        h1 { class: "card-title", "Course" }
                        CourseSummary { details: data }
                        div {
                            class: "card-actions mt-4",
                            Link { to: Route::EditCourse { id }, class: "btn btn-primary", "Edit" }
                            Link { to: Route::Courses {}, class: "btn btn-ghost", "Back to List" }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

/// Read-only course values, shared with the delete confirmation view.
#[component]
pub fn CourseSummary(details: CourseDetailsDto) -> Element {
    let course = details.course;
    let department = course.department_name.unwrap_or_else(|| "None".to_string());

    rsx!(
        dl {
            class: "grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2",
            dt { class: "font-semibold", "Number" }
            dd { "{course.id}" }
            dt { class: "font-semibold", "Title" }
            dd { "{course.title}" }
            dt { class: "font-semibold", "Credits" }
            dd { "{course.credits}" }
            dt { class: "font-semibold", "Department" }
            dd { "{department}" }
            dt { class: "font-semibold", "Enrollments" }
            dd { "{details.enrollment_count}" }
        }
    )
}
