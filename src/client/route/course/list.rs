use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};
use dioxus_logger::tracing;

use crate::{
    client::{
        app::SITE_NAME,
        component::{Page, RowActions},
        model::{delete_notice::DeleteNotice, error::ApiError},
        router::Route,
    },
    model::course::CourseDto,
};

#[cfg(feature = "web")]
use crate::client::api::course::get_courses;

#[component]
pub fn Courses() -> Element {
    let mut courses = use_signal(|| None::<Vec<CourseDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_courses);

        use_effect(move || match future.read_unchecked().as_ref() {
            Some(Ok(data)) => {
                courses.set(Some(data.clone()));
                error.set(None);
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch courses: {}", err);
                error.set(Some(err.clone()));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Courses | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "flex justify-between items-center mb-4",
                    h1 {
                        class: "text-2xl font-bold",
                        "Courses"
                    }
                    Link {
                        to: Route::CreateCourse {},
                        class: "btn btn-primary",
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Create New"
                    }
                }
                if let Some(courses) = courses() {
                    if courses.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No courses yet"
                        }
                    } else {
                        CoursesTable { courses }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading courses: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }
            }
        }
    }
}

#[component]
fn CoursesTable(courses: Vec<CourseDto>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Number" }
                        th { "Title" }
                        th { "Credits" }
                        th { "Department" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for course in courses {
                        tr {
                            key: "{course.id}",
                            td { "{course.id}" }
                            td { "{course.title}" }
                            td { "{course.credits}" }
                            td { {course.department_name.clone().unwrap_or_default()} }
                            td {
                                RowActions {
                                    edit: Route::EditCourse { id: course.id },
                                    details: Route::CourseDetails { id: course.id },
                                    delete: Route::DeleteCourse { id: course.id, notice: DeleteNotice::None },
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
