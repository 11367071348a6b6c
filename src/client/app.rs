use dioxus::prelude::*;

use crate::{
    client::{model::cache::Cache, router::Route},
    model::department::DepartmentDto,
};

pub const SITE_NAME: &str = "Contoso University";

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Cache::<Vec<DepartmentDto>>::default()));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Courses and instructors of Contoso University"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
