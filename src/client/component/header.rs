use dioxus::prelude::*;

use crate::client::{app::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            Link {
                to: Route::Courses {},
                class: "btn btn-ghost",
                "Courses"
            }
            Link {
                to: Route::Instructors {},
                class: "btn btn-ghost",
                "Instructors"
            }
        }
    })
}
