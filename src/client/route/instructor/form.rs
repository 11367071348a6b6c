use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{
    client::component::FieldMessage,
    model::{api::FieldErrorDto, instructor::InstructorFormDto},
};

#[component]
pub fn InstructorFormFields(
    last_name: Signal<String>,
    first_mid_name: Signal<String>,
    hire_date: Signal<String>,
    field_errors: Vec<FieldErrorDto>,
) -> Element {
    rsx!(
        div {
            class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Last Name" } }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                value: "{last_name}",
                oninput: move |evt| last_name.set(evt.value()),
            }
            FieldMessage { field: "last_name", errors: field_errors.clone() }
        }
        div {
            class: "form-control w-full",
            label { class: "label", span { class: "label-text", "First Name" } }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                value: "{first_mid_name}",
                oninput: move |evt| first_mid_name.set(evt.value()),
            }
            FieldMessage { field: "first_mid_name", errors: field_errors.clone() }
        }
        div {
            class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Hire Date" } }
            input {
                r#type: "date",
                class: "input input-bordered w-full",
                value: "{hire_date}",
                oninput: move |evt| hire_date.set(evt.value()),
            }
            FieldMessage { field: "hire_date", errors: field_errors }
        }
    )
}

/// Builds the request body from the raw inputs. Name rules are checked by the server;
/// only a missing or malformed date is caught here because the body cannot carry one.
pub fn build_instructor_form(
    last_name: String,
    first_mid_name: String,
    hire_date: &str,
) -> Result<InstructorFormDto, FieldErrorDto> {
    let hire_date = NaiveDate::parse_from_str(hire_date.trim(), "%Y-%m-%d").map_err(|_| {
        FieldErrorDto {
            field: "hire_date".to_string(),
            message: "The Hire Date field is required.".to_string(),
        }
    })?;

    Ok(InstructorFormDto {
        last_name,
        first_mid_name,
        hire_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_body_from_date_input() {
        let body =
            build_instructor_form("Harui".to_string(), "Roger".to_string(), "1998-07-01").unwrap();

        assert_eq!(body.hire_date, NaiveDate::from_ymd_opt(1998, 7, 1).unwrap());
        assert_eq!(body.last_name, "Harui");
    }

    #[test]
    fn empty_date_is_reported_on_hire_date() {
        let err = build_instructor_form("Harui".to_string(), "Roger".to_string(), "").unwrap_err();

        assert_eq!(err.field, "hire_date");
    }
}
