//! Course factory for creating test course entities.
//!
//! Defaults are sourced from the course fixture so in-memory models and inserted
//! rows agree.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .title("Calculus")
///     .credits(4)
///     .department_id(Some(department.id))
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::course::Model,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values from fixture.
    ///
    /// The title is made unique with an auto-incremented suffix.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::course::entity_builder()
            .title(format!("Course {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the course title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the credit count.
    pub fn credits(mut self, credits: i32) -> Self {
        self.entity.credits = credits;
        self
    }

    /// Sets the owning department.
    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.entity.department_id = department_id;
        self
    }

    /// Sets the stored row version.
    ///
    /// Useful for simulating a record that has already been edited several times.
    pub fn row_version(mut self, row_version: i32) -> Self {
        self.entity.row_version = row_version;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            credits: ActiveValue::Set(self.entity.credits),
            department_id: ActiveValue::Set(self.entity.department_id),
            row_version: ActiveValue::Set(self.entity.row_version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values in the given department.
///
/// Shorthand for `CourseFactory::new(db).department_id(department_id).build().await`.
pub async fn create_course(
    db: &DatabaseConnection,
    department_id: Option<i32>,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db)
        .department_id(department_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::department::create_department;

    #[tokio::test]
    async fn creates_course_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_course_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let course = create_course(db, None).await?;

        assert!(course.title.starts_with("Course "));
        assert_eq!(course.credits, fixture::course::DEFAULT_CREDITS);
        assert_eq!(course.row_version, fixture::course::INITIAL_ROW_VERSION);

        Ok(())
    }

    #[tokio::test]
    async fn creates_course_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_course_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let department = create_department(db).await?;
        let course = CourseFactory::new(db)
            .title("Calculus")
            .credits(4)
            .department_id(Some(department.id))
            .row_version(3)
            .build()
            .await?;

        assert_eq!(course.title, "Calculus");
        assert_eq!(course.credits, 4);
        assert_eq!(course.department_id, Some(department.id));
        assert_eq!(course.row_version, 3);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_courses() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_course_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_course(db, None).await?;
        let second = create_course(db, None).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.title, second.title);

        Ok(())
    }
}
