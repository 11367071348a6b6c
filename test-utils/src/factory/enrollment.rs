//! Enrollment factory for enrolling test students in courses.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Enrolls a student in a course without a grade.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Course to enroll in
/// - `student_id` - Student being enrolled
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_enrollment(
    db: &DatabaseConnection,
    course_id: i32,
    student_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        id: ActiveValue::NotSet,
        course_id: ActiveValue::Set(course_id),
        student_id: ActiveValue::Set(student_id),
        grade: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
