//! Office assignment factory for giving test instructors an office.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns an office location to an instructor.
///
/// # Arguments
/// - `db` - Database connection
/// - `instructor_id` - Instructor receiving the office
/// - `location` - Office location label
///
/// # Returns
/// - `Ok(entity::office_assignment::Model)` - Created office assignment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_office_assignment(
    db: &DatabaseConnection,
    instructor_id: i32,
    location: impl Into<String>,
) -> Result<entity::office_assignment::Model, DbErr> {
    entity::office_assignment::ActiveModel {
        instructor_id: ActiveValue::Set(instructor_id),
        location: ActiveValue::Set(location.into()),
    }
    .insert(db)
    .await
}
