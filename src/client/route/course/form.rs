use dioxus::prelude::*;

use crate::{
    client::component::{DepartmentSelect, FieldMessage},
    model::api::FieldErrorDto,
};

/// Title, credits and department inputs shared by the create and edit views.
///
/// Credits are kept as typed text and only parsed on submit, so a half-typed value
/// is never silently replaced.
#[component]
pub fn CourseFormFields(
    title: Signal<String>,
    credits: Signal<String>,
    department_id: Signal<Option<i32>>,
    field_errors: Vec<FieldErrorDto>,
) -> Element {
    rsx!(
        div {
            class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Title" } }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            FieldMessage { field: "title", errors: field_errors.clone() }
        }
        div {
            class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Credits" } }
            input {
                r#type: "number",
                class: "input input-bordered w-full",
                value: "{credits}",
                oninput: move |evt| credits.set(evt.value()),
            }
            FieldMessage { field: "credits", errors: field_errors.clone() }
        }
        div {
            class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Department" } }
            DepartmentSelect { selected: department_id }
            FieldMessage { field: "department_id", errors: field_errors }
        }
    )
}

/// Parses the credits input, reporting non-numeric text as a field message.
pub fn parse_credits(value: &str) -> Result<i32, FieldErrorDto> {
    value.trim().parse::<i32>().map_err(|_| FieldErrorDto {
        field: "credits".to_string(),
        message: "The field Credits must be a number.".to_string(),
    })
}
