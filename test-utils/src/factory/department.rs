//! Department factory for creating test department entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let department = DepartmentFactory::new(&db)
///     .name("Mathematics")
///     .build()
///     .await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    budget: f64,
    start_date: NaiveDate,
    instructor_id: Option<i32>,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Department {id}"` where id is auto-incremented
    /// - budget: `100000.0`
    /// - start_date: `2007-09-01`
    /// - instructor_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Department {}", id),
            budget: 100_000.0,
            start_date: NaiveDate::from_ymd_opt(2007, 9, 1).unwrap_or_default(),
            instructor_id: None,
        }
    }

    /// Sets the department name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department budget.
    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the administrating instructor.
    pub fn administrator(mut self, instructor_id: Option<i32>) -> Self {
        self.instructor_id = instructor_id;
        self
    }

    /// Builds and inserts the department entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::department::Model)` - Created department entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            budget: ActiveValue::Set(self.budget),
            start_date: ActiveValue::Set(self.start_date),
            instructor_id: ActiveValue::Set(self.instructor_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
///
/// Shorthand for `DepartmentFactory::new(db).build().await`.
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_department_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_course_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let department = create_department(db).await?;

        assert!(department.name.starts_with("Department "));
        assert_eq!(department.instructor_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn creates_department_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_course_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let department = DepartmentFactory::new(db)
            .name("Mathematics")
            .budget(250_000.0)
            .build()
            .await?;

        assert_eq!(department.name, "Mathematics");
        assert_eq!(department.budget, 250_000.0);

        Ok(())
    }
}
