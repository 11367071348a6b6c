//! Instructor fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::instructor;

/// Default test instructor last name.
pub const DEFAULT_LAST_NAME: &str = "Abercrombie";

/// Default test instructor first and middle name.
pub const DEFAULT_FIRST_MID_NAME: &str = "Kim";

/// Default hire date.
pub fn default_hire_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 3, 11).unwrap_or_default()
}

/// Creates an instructor entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - last_name: `"Abercrombie"`
/// - first_mid_name: `"Kim"`
/// - hire_date: `1995-03-11`
pub fn entity() -> instructor::Model {
    entity_builder().build()
}

/// Creates an instructor entity builder for customization.
pub fn entity_builder() -> InstructorEntityBuilder {
    InstructorEntityBuilder::default()
}

/// Builder for creating customized instructor entity models.
pub struct InstructorEntityBuilder {
    id: i32,
    last_name: String,
    first_mid_name: String,
    hire_date: NaiveDate,
}

impl Default for InstructorEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            last_name: DEFAULT_LAST_NAME.to_string(),
            first_mid_name: DEFAULT_FIRST_MID_NAME.to_string(),
            hire_date: default_hire_date(),
        }
    }
}

impl InstructorEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn first_mid_name(mut self, first_mid_name: impl Into<String>) -> Self {
        self.first_mid_name = first_mid_name.into();
        self
    }

    pub fn hire_date(mut self, hire_date: NaiveDate) -> Self {
        self.hire_date = hire_date;
        self
    }

    /// Builds and returns the instructor entity model.
    pub fn build(self) -> instructor::Model {
        instructor::Model {
            id: self.id,
            last_name: self.last_name,
            first_mid_name: self.first_mid_name,
            hire_date: self.hire_date,
        }
    }
}
