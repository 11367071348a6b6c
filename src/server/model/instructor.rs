//! Domain models and parameters for instructor operations.

use chrono::NaiveDate;

use crate::{
    model::instructor::{
        AssignedCourseDto, InstructorDetailsDto, InstructorDto, InstructorFormDto,
    },
    server::error::validation::FieldError,
};

pub const NAME_MAX_LEN: usize = 50;

/// An instructor with their office location, if assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub id: i32,
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: NaiveDate,
    pub office_location: Option<String>,
}

impl Instructor {
    pub fn from_entity(
        entity: entity::instructor::Model,
        office: Option<entity::office_assignment::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            last_name: entity.last_name,
            first_mid_name: entity.first_mid_name,
            hire_date: entity.hire_date,
            office_location: office.map(|o| o.location),
        }
    }

    pub fn into_dto(self) -> InstructorDto {
        InstructorDto {
            id: self.id,
            last_name: self.last_name,
            first_mid_name: self.first_mid_name,
            hire_date: self.hire_date,
            office_location: self.office_location,
        }
    }
}

/// A course taught by an instructor.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedCourse {
    pub id: i32,
    pub title: String,
    pub department_name: Option<String>,
}

impl AssignedCourse {
    pub fn from_entity(
        course: entity::course::Model,
        department: Option<entity::department::Model>,
    ) -> Self {
        Self {
            id: course.id,
            title: course.title,
            department_name: department.map(|d| d.name),
        }
    }

    pub fn into_dto(self) -> AssignedCourseDto {
        AssignedCourseDto {
            id: self.id,
            title: self.title,
            department_name: self.department_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstructorDetails {
    pub instructor: Instructor,
    pub courses: Vec<AssignedCourse>,
}

impl InstructorDetails {
    pub fn into_dto(self) -> InstructorDetailsDto {
        InstructorDetailsDto {
            instructor: self.instructor.into_dto(),
            courses: self
                .courses
                .into_iter()
                .map(AssignedCourse::into_dto)
                .collect(),
        }
    }
}

/// Values accepted when creating or editing an instructor.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructorParams {
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: NaiveDate,
}

impl InstructorParams {
    pub fn from_dto(dto: InstructorFormDto) -> Self {
        Self {
            last_name: dto.last_name,
            first_mid_name: dto.first_mid_name,
            hire_date: dto.hire_date,
        }
    }

    /// Checks that both name parts are present and at most `NAME_MAX_LEN` characters.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            ("last_name", "Last Name", &self.last_name),
            ("first_mid_name", "First Name", &self.first_mid_name),
        ]
        .into_iter()
        .filter_map(|(field, label, value)| validate_name(field, label, value))
        .collect()
    }
}

fn validate_name(field: &'static str, label: &str, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(
            field,
            format!("The {} field is required.", label),
        ))
    } else if value.chars().count() > NAME_MAX_LEN {
        Some(FieldError::new(
            field,
            format!(
                "The field {} must be a string with a maximum length of {}.",
                label, NAME_MAX_LEN
            ),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn params(last_name: &str, first_mid_name: &str) -> InstructorParams {
        InstructorParams {
            last_name: last_name.to_string(),
            first_mid_name: first_mid_name.to_string(),
            hire_date: fixture::instructor::default_hire_date(),
        }
    }

    #[test]
    fn accepts_regular_names() {
        assert!(params("Abercrombie", "Kim").validate().is_empty());
    }

    #[test]
    fn requires_both_names() {
        let errors = params("  ", "").validate();

        assert_eq!(
            errors,
            vec![
                FieldError::new("last_name", "The Last Name field is required."),
                FieldError::new("first_mid_name", "The First Name field is required."),
            ]
        );
    }

    #[test]
    fn rejects_names_longer_than_limit() {
        let errors = params(&"x".repeat(51), "Kim").validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "last_name");
    }

    #[test]
    fn maps_office_location_from_assignment() {
        let entity = fixture::instructor::entity();
        let office = entity::office_assignment::Model {
            instructor_id: entity.id,
            location: "Smith 17".to_string(),
        };

        let instructor = Instructor::from_entity(entity, Some(office));

        assert_eq!(instructor.office_location.as_deref(), Some("Smith 17"));
        assert_eq!(instructor.into_dto().full_name(), "Abercrombie, Kim");
    }
}
