use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::model::cache::Cache, model::department::DepartmentDto};

#[cfg(feature = "web")]
use crate::client::api::department::get_departments;

/// Department selector backed by the app-wide department cache.
///
/// Departments are fetched on first use and reused by every course form afterwards.
#[component]
pub fn DepartmentSelect(selected: Signal<Option<i32>>) -> Element {
    let mut cache = use_context::<Signal<Cache<Vec<DepartmentDto>>>>();

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            if cache.peek().is_fetched() {
                None
            } else {
                Some(get_departments().await)
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(departments) => cache.set(Cache::Fetched(departments.clone())),
                    Err(err) => {
                        tracing::error!("Failed to fetch departments: {}", err);
                        cache.set(Cache::Error(err.clone()));
                    }
                }
            }
        });
    }

    let departments = cache.read().data().cloned().unwrap_or_default();
    let current = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx!(
        select {
            class: "select select-bordered w-full",
            value: "{current}",
            onchange: move |evt| {
                selected.set(evt.value().parse::<i32>().ok());
            },
            option { value: "", "None" }
            for department in departments {
                option {
                    value: "{department.id}",
                    selected: Some(department.id) == selected(),
                    "{department.name}"
                }
            }
        }
        if let Some(err) = cache.read().error() {
            p {
                class: "text-error text-sm mt-1",
                "Failed to load departments: {err.message}"
            }
        }
    )
}
