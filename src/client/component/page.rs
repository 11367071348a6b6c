use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col items-center justify-center gap-4",
            h1 {
                class: "text-5xl font-bold",
                "{status}"
            }
            p {
                class: "opacity-75",
                "{message}"
            }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to home"
            }
        }
    )
}
