//! Course fixtures for creating in-memory test data.

use entity::course;

/// Default test course title.
pub const DEFAULT_TITLE: &str = "Test Course";

/// Default credit count.
pub const DEFAULT_CREDITS: i32 = 3;

/// Row version assigned to freshly inserted courses.
pub const INITIAL_ROW_VERSION: i32 = 1;

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Course"`
/// - credits: `3`
/// - department_id: `None`
/// - row_version: `1`
pub fn entity() -> course::Model {
    entity_builder().build()
}

/// Creates a course entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let course = fixture::course::entity_builder()
///     .title("Calculus")
///     .row_version(7)
///     .build();
/// ```
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder::default()
}

/// Builder for creating customized course entity models.
pub struct CourseEntityBuilder {
    id: i32,
    title: String,
    credits: i32,
    department_id: Option<i32>,
    row_version: i32,
}

impl Default for CourseEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            credits: DEFAULT_CREDITS,
            department_id: None,
            row_version: INITIAL_ROW_VERSION,
        }
    }
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn row_version(mut self, row_version: i32) -> Self {
        self.row_version = row_version;
        self
    }

    /// Builds and returns the course entity model.
    pub fn build(self) -> course::Model {
        course::Model {
            id: self.id,
            title: self.title,
            credits: self.credits,
            department_id: self.department_id,
            row_version: self.row_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_course_with_defaults() {
        let course = entity();

        assert_eq!(course.title, DEFAULT_TITLE);
        assert_eq!(course.credits, DEFAULT_CREDITS);
        assert_eq!(course.row_version, INITIAL_ROW_VERSION);
        assert!(course.department_id.is_none());
    }

    #[test]
    fn overrides_selected_fields() {
        let course = entity_builder()
            .title("Calculus")
            .department_id(Some(4))
            .row_version(9)
            .build();

        assert_eq!(course.title, "Calculus");
        assert_eq!(course.credits, DEFAULT_CREDITS);
        assert_eq!(course.department_id, Some(4));
        assert_eq!(course.row_version, 9);
    }
}
