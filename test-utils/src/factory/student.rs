//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a student with a unique last name enrolled on 2012-09-01.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    let id = next_id();
    entity::student::ActiveModel {
        id: ActiveValue::NotSet,
        last_name: ActiveValue::Set(format!("Student {}", id)),
        first_mid_name: ActiveValue::Set("Carson".to_string()),
        enrollment_date: ActiveValue::Set(
            NaiveDate::from_ymd_opt(2012, 9, 1).unwrap_or_default(),
        ),
    }
    .insert(db)
    .await
}
