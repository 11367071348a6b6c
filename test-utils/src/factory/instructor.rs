//! Instructor factory for creating test instructor entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instructors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let instructor = InstructorFactory::new(&db)
///     .last_name("Fakhouri")
///     .first_mid_name("Fadi")
///     .build()
///     .await?;
/// ```
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::instructor::Model,
}

impl<'a> InstructorFactory<'a> {
    /// Creates a new InstructorFactory with default values from fixture.
    ///
    /// The last name is made unique with an auto-incremented suffix.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::instructor::entity_builder()
            .last_name(format!("Instructor {}", id))
            .build();

        Self { db, entity }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn first_mid_name(mut self, first_mid_name: impl Into<String>) -> Self {
        self.entity.first_mid_name = first_mid_name.into();
        self
    }

    pub fn hire_date(mut self, hire_date: NaiveDate) -> Self {
        self.entity.hire_date = hire_date;
        self
    }

    /// Builds and inserts the instructor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::instructor::Model)` - Created instructor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            id: ActiveValue::NotSet,
            last_name: ActiveValue::Set(self.entity.last_name),
            first_mid_name: ActiveValue::Set(self.entity.first_mid_name),
            hire_date: ActiveValue::Set(self.entity.hire_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor with default values.
///
/// Shorthand for `InstructorFactory::new(db).build().await`.
pub async fn create_instructor(
    db: &DatabaseConnection,
) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db).build().await
}
