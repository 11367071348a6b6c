//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course taught by an instructor, owned by a department.
///
/// This is a convenience method that creates:
/// 1. Instructor
/// 2. Department (administered by the instructor)
/// 3. Course (in the department)
/// 4. Course assignment linking the instructor to the course
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((instructor, department, course))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_assigned_course(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::instructor::Model,
        entity::department::Model,
        entity::course::Model,
    ),
    DbErr,
> {
    let instructor = crate::factory::instructor::create_instructor(db).await?;
    let department = crate::factory::department::DepartmentFactory::new(db)
        .administrator(Some(instructor.id))
        .build()
        .await?;
    let course = crate::factory::course::create_course(db, Some(department.id)).await?;
    crate::factory::course_assignment::create_course_assignment(db, instructor.id, course.id)
        .await?;

    Ok((instructor, department, course))
}
