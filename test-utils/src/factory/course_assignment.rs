//! Course assignment factory for linking test instructors to courses.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns an instructor to teach a course.
///
/// # Arguments
/// - `db` - Database connection
/// - `instructor_id` - Instructor teaching the course
/// - `course_id` - Course being taught
///
/// # Returns
/// - `Ok(entity::course_assignment::Model)` - Created assignment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_course_assignment(
    db: &DatabaseConnection,
    instructor_id: i32,
    course_id: i32,
) -> Result<entity::course_assignment::Model, DbErr> {
    entity::course_assignment::ActiveModel {
        instructor_id: ActiveValue::Set(instructor_id),
        course_id: ActiveValue::Set(course_id),
    }
    .insert(db)
    .await
}
