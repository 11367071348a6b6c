//! Domain models and parameters for course operations.
//!
//! Besides the plain conversions, this module holds the two pure pieces of course
//! logic: input validation and the comparison between the values a user submitted
//! and the values currently stored, used to explain an edit conflict.

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDetailsDto, CourseDto, CreateCourseDto, UpdateCourseDto},
    },
    server::error::validation::FieldError,
};

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 50;
pub const MIN_CREDITS: i32 = 0;
pub const MAX_CREDITS: i32 = 5;

/// Summary for an edit of a course that no longer exists.
pub const DELETED_BY_ANOTHER_USER: &str =
    "Unable to save changes. The course was deleted by another user.";

/// Summary for an edit that raced with another user's edit.
pub const MODIFIED_BY_ANOTHER_USER: &str = "The record you attempted to edit was modified by \
another user after you got the original value. The edit operation was canceled and the current \
values in the database have been displayed. If you still want to edit this record, click the Save \
button again. Otherwise go back to the list.";

/// A course as stored, with its department name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
    pub row_version: i32,
}

impl Course {
    /// Converts a course entity and its optional department into the domain model.
    ///
    /// # Arguments
    /// - `entity` - Course row
    /// - `department` - Department row loaded alongside, if any
    ///
    /// # Returns
    /// - `Course` - Domain model with the department name resolved
    pub fn from_entity(
        entity: entity::course::Model,
        department: Option<entity::department::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            credits: entity.credits,
            department_id: entity.department_id,
            department_name: department.map(|d| d.name),
            row_version: entity.row_version,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            credits: self.credits,
            department_id: self.department_id,
            department_name: self.department_name,
            row_version: self.row_version,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetails {
    pub course: Course,
    pub enrollment_count: u64,
}

impl CourseDetails {
    pub fn into_dto(self) -> CourseDetailsDto {
        CourseDetailsDto {
            course: self.course.into_dto(),
            enrollment_count: self.enrollment_count,
        }
    }
}

/// The user-editable values of a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseValues {
    pub title: String,
    pub credits: i32,
    pub department_id: Option<i32>,
}

impl CourseValues {
    pub fn from_create_dto(dto: CreateCourseDto) -> Self {
        Self {
            title: dto.title,
            credits: dto.credits,
            department_id: dto.department_id,
        }
    }

    /// Checks the title length and credit range.
    ///
    /// Department existence needs the database and is checked by the service.
    ///
    /// # Returns
    /// - Empty `Vec` when the values are valid
    /// - One `FieldError` per invalid field otherwise
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let title_len = self.title.chars().count();
        if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&title_len) {
            errors.push(FieldError::new(
                "title",
                format!(
                    "The field Title must be a string with a minimum length of {} and a maximum length of {}.",
                    TITLE_MIN_LEN, TITLE_MAX_LEN
                ),
            ));
        }

        if !(MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            errors.push(FieldError::new(
                "credits",
                format!(
                    "The field Credits must be between {} and {}.",
                    MIN_CREDITS, MAX_CREDITS
                ),
            ));
        }

        errors
    }

    /// Lists every field whose submitted value differs from the stored one.
    ///
    /// Each message reports the stored value as `Current Value: <value>`. The department
    /// is reported by name, or `None` when the stored course has no department.
    ///
    /// # Arguments
    /// - `current` - Course as currently stored
    ///
    /// # Returns
    /// - One `FieldError` per differing field, in form order (title, credits, department)
    pub fn discrepancies(&self, current: &Course) -> Vec<FieldError> {
        let mut messages = Vec::new();

        if self.title != current.title {
            messages.push(FieldError::new(
                "title",
                format!("Current Value: {}", current.title),
            ));
        }

        if self.credits != current.credits {
            messages.push(FieldError::new(
                "credits",
                format!("Current Value: {}", current.credits),
            ));
        }

        if self.department_id != current.department_id {
            let name = current.department_name.as_deref().unwrap_or("None");
            messages.push(FieldError::new(
                "department_id",
                format!("Current Value: {}", name),
            ));
        }

        messages
    }
}

/// Parameters for editing a course under optimistic concurrency.
#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub values: CourseValues,
    /// Token the client read together with the values it edited.
    pub row_version: i32,
}

impl UpdateCourseParams {
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Self {
        Self {
            id,
            values: CourseValues {
                title: dto.title,
                credits: dto.credits,
                department_id: dto.department_id,
            },
            row_version: dto.row_version,
        }
    }
}

/// Explanation returned when an edit loses a concurrency race.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseConflict {
    pub message: &'static str,
    pub field_errors: Vec<FieldError>,
    /// Fresh token to retry with; `None` when the course was deleted.
    pub row_version: Option<i32>,
}

impl CourseConflict {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_BY_ANOTHER_USER,
            field_errors: Vec::new(),
            row_version: None,
        }
    }

    /// Builds the conflict for a course that still exists with a different token.
    ///
    /// Reported even when no field differs, so a stale token never overwrites silently.
    pub fn modified(submitted: &CourseValues, current: &Course) -> Self {
        Self {
            message: MODIFIED_BY_ANOTHER_USER,
            field_errors: submitted.discrepancies(current),
            row_version: Some(current.row_version),
        }
    }

    pub fn into_dto(self) -> ErrorDto {
        ErrorDto {
            error: self.message.to_string(),
            field_errors: self
                .field_errors
                .into_iter()
                .map(FieldError::into_dto)
                .collect(),
            row_version: self.row_version,
        }
    }
}

/// Result of an edit that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(Course),
    Conflict(CourseConflict),
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn stored(title: &str, credits: i32, department: Option<(i32, &str)>) -> Course {
        let entity = fixture::course::entity_builder()
            .title(title)
            .credits(credits)
            .department_id(department.map(|(id, _)| id))
            .row_version(2)
            .build();
        Course {
            department_name: department.map(|(_, name)| name.to_string()),
            ..Course::from_entity(entity, None)
        }
    }

    fn submitted(title: &str, credits: i32, department_id: Option<i32>) -> CourseValues {
        CourseValues {
            title: title.to_string(),
            credits,
            department_id,
        }
    }

    #[test]
    fn accepts_values_within_bounds() {
        assert!(submitted("Art", 0, None).validate().is_empty());
        assert!(submitted(&"x".repeat(50), 5, Some(1)).validate().is_empty());
    }

    #[test]
    fn rejects_credits_outside_range() {
        for credits in [-1, 6, 42] {
            let errors = submitted("Calculus", credits, None).validate();

            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "credits");
            assert_eq!(errors[0].message, "The field Credits must be between 0 and 5.");
        }
    }

    #[test]
    fn rejects_title_too_short_or_too_long() {
        assert_eq!(submitted("AB", 3, None).validate()[0].field, "title");
        assert_eq!(submitted(&"x".repeat(51), 3, None).validate()[0].field, "title");
    }

    #[test]
    fn counts_title_length_in_characters() {
        assert!(submitted("Ééé", 3, None).validate().is_empty());
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = submitted("", 9, None).validate();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "credits"]);
    }

    #[test]
    fn reports_changed_title_with_current_value() {
        let current = stored("Calculus II", 4, None);

        let messages = submitted("Calculus", 4, None).discrepancies(&current);

        assert_eq!(
            messages,
            vec![FieldError::new("title", "Current Value: Calculus II")]
        );
    }

    #[test]
    fn reports_department_by_name() {
        let current = stored("Calculus", 4, Some((2, "Mathematics")));

        let messages = submitted("Calculus", 3, Some(1)).discrepancies(&current);

        assert_eq!(
            messages,
            vec![
                FieldError::new("credits", "Current Value: 4"),
                FieldError::new("department_id", "Current Value: Mathematics"),
            ]
        );
    }

    #[test]
    fn reports_removed_department_as_none() {
        let current = stored("Calculus", 4, None);

        let messages = submitted("Calculus", 4, Some(2)).discrepancies(&current);

        assert_eq!(
            messages,
            vec![FieldError::new("department_id", "Current Value: None")]
        );
    }

    #[test]
    fn identical_values_have_no_discrepancies() {
        let current = stored("Calculus", 4, Some((2, "Mathematics")));

        assert!(submitted("Calculus", 4, Some(2))
            .discrepancies(&current)
            .is_empty());
    }

    #[test]
    fn modified_conflict_carries_fresh_token_even_without_differences() {
        let current = stored("Calculus", 4, None);

        let conflict = CourseConflict::modified(&submitted("Calculus", 4, None), &current);

        assert_eq!(conflict.message, MODIFIED_BY_ANOTHER_USER);
        assert!(conflict.field_errors.is_empty());
        assert_eq!(conflict.row_version, Some(2));
    }

    #[test]
    fn deleted_conflict_has_no_token() {
        let dto = CourseConflict::deleted().into_dto();

        assert_eq!(dto.error, DELETED_BY_ANOTHER_USER);
        assert!(dto.field_errors.is_empty());
        assert_eq!(dto.row_version, None);
    }
}
