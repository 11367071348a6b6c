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
    model::instructor::InstructorDto,
};

#[cfg(feature = "web")]
use crate::client::api::instructor::get_instructors;

#[component]
pub fn Instructors() -> Element {
    let mut instructors = use_signal(|| None::<Vec<InstructorDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_instructors);

        use_effect(move || match future.read_unchecked().as_ref() {
            Some(Ok(data)) => {
                instructors.set(Some(data.clone()));
                error.set(None);
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch instructors: {}", err);
                error.set(Some(err.clone()));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Instructors | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "flex justify-between items-center mb-4",
                    h1 {
                        class: "text-2xl font-bold",
                        "Instructors"
                    }
                    Link {
                        to: Route::CreateInstructor {},
                        class: "btn btn-primary",
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Create New"
                    }
                }
                if let Some(instructors) = instructors() {
                    if instructors.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No instructors yet"
                        }
                    } else {
                        InstructorsTable { instructors }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading instructors: {err.message}" }
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
fn InstructorsTable(instructors: Vec<InstructorDto>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Last Name" }
                        th { "First Name" }
                        th { "Hire Date" }
                        th { "Office" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for instructor in instructors {
                        tr {
                            key: "{instructor.id}",
                            td { "{instructor.last_name}" }
                            td { "{instructor.first_mid_name}" }
                            td { "{instructor.hire_date}" }
                            td { {instructor.office_location.clone().unwrap_or_default()} }
                            td {
                                RowActions {
                                    edit: Route::EditInstructor { id: instructor.id },
                                    details: Route::InstructorDetails { id: instructor.id },
                                    delete: Route::DeleteInstructor { id: instructor.id, notice: DeleteNotice::None },
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
