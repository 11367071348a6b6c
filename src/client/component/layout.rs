use dioxus::prelude::*;

use crate::client::{app::SITE_NAME, component::Header, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "flex flex-col min-h-screen",
            Header {  }
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            footer {
                class: "footer footer-center p-4 bg-base-200 text-sm opacity-75",
                "© {SITE_NAME}"
            }
        }
    )
}
