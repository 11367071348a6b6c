pub mod course;
pub mod instructor;

use dioxus::prelude::*;

use crate::client::{
    app::SITE_NAME,
    component::{page::ErrorPage, Page},
    router::Route,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-4xl space-y-6",
                h1 {
                    class: "text-3xl font-bold",
                    "Welcome to {SITE_NAME}"
                }
                p {
                    "Manage the course catalogue and the teaching staff. Course edits and \
                    deletes are checked against changes made by other users in the meantime."
                }
                div {
                    class: "flex gap-4",
                    Link { to: Route::Courses {}, class: "btn btn-primary", "Courses" }
                    Link { to: Route::Instructors {}, class: "btn btn-primary", "Instructors" }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        ErrorPage { status: 404, message: format!("No page at /{}", path) }
    }
}
