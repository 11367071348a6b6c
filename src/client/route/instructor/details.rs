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
    model::instructor::InstructorDetailsDto,
};

#[cfg(feature = "web")]
use crate::client::api::instructor::get_instructor;

#[component]
pub fn InstructorDetails(id: i32) -> Element {
    let mut details = use_signal(|| None::<InstructorDetailsDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_instructor(id).await });

        use_effect(move || match future.read_unchecked().as_ref() {
            Some(Ok(data)) => details.set(Some(data.clone())),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch instructor {}: {}", id, err);
                error.set(Some(err.clone()));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Instructor Details | {SITE_NAME}" }
        if let Some(data) = details() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-3xl card bg-base-200",
                    div {
                        class: "card-body",
                        h1 { class: "card-title", "Instructor" }
                        InstructorSummary { details: data.clone() }
                        h2 { class: "font-semibold mt-4", "Courses" }
                        if data.courses.is_empty() {
                            p { class: "opacity-50", "No courses assigned" }
                        } else {
                            table {
                                class: "table table-sm w-full",
                                thead {
                                    tr {
                                        th { "Number" }
                                        th { "Title" }
                                        th { "Department" }
                                    }
                                }
                                tbody {
                                    for course in data.courses {
                                        tr {
                                            key: "{course.id}",
                                            td { "{course.id}" }
                                            td { "{course.title}" }
                                            td { {course.department_name.clone().unwrap_or_default()} }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "card-actions mt-4",
                            Link { to: Route::EditInstructor { id }, class: "btn btn-primary", "Edit" }
                            Link { to: Route::Instructors {}, class: "btn btn-ghost", "Back to List" }
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

#[component]
pub fn InstructorSummary(details: InstructorDetailsDto) -> Element {
    let instructor = details.instructor;
    let office = instructor.office_location.unwrap_or_default();

    rsx!(
        dl {
            class: "grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2",
            dt { class: "font-semibold", "Last Name" }
            dd { "{instructor.last_name}" }
            dt { class: "font-semibold", "First Name" }
            dd { "{instructor.first_mid_name}" }
            dt { class: "font-semibold", "Hire Date" }
            dd { "{instructor.hire_date}" }
            dt { class: "font-semibold", "Office" }
            dd { "{office}" }
        }
    )
}
