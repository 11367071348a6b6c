use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleInfo, FaPen, FaTrash},
    Icon,
};

use crate::client::router::Route;

/// Edit / details / delete links for one table row.
#[component]
pub fn RowActions(edit: Route, details: Route, delete: Route) -> Element {
    rsx!(
        div {
            class: "flex justify-end gap-2",
            Link {
                to: edit,
                class: "btn btn-sm btn-ghost",
                title: "Edit",
                Icon { width: 14, height: 14, icon: FaPen }
            }
            Link {
                to: details,
                class: "btn btn-sm btn-ghost",
                title: "Details",
                Icon { width: 14, height: 14, icon: FaCircleInfo }
            }
            Link {
                to: delete,
                class: "btn btn-sm btn-ghost text-error",
                title: "Delete",
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
    )
}
