use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::course::{Course, CourseValues, UpdateCourseParams};

/// Row version written when a course is first inserted.
pub const INITIAL_ROW_VERSION: i32 = 1;

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses with their department, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .find_also_related(entity::prelude::Department)
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(courses
            .into_iter()
            .map(|(course, department)| Course::from_entity(course, department))
            .collect())
    }

    /// Gets a course by ID with its department
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let course = entity::prelude::Course::find_by_id(id)
            .find_also_related(entity::prelude::Department)
            .one(self.db)
            .await?;

        Ok(course.map(|(course, department)| Course::from_entity(course, department)))
    }

    /// Checks whether a course with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the students enrolled in a course
    pub async fn count_enrollments(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    /// Creates a new course with the initial row version
    pub async fn create(&self, values: CourseValues) -> Result<Course, DbErr> {
        let course = entity::course::ActiveModel {
            title: ActiveValue::Set(values.title),
            credits: ActiveValue::Set(values.credits),
            department_id: ActiveValue::Set(values.department_id),
            row_version: ActiveValue::Set(INITIAL_ROW_VERSION),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(course.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found after creation",
                course.id
            )))
    }

    /// Updates a course only if its stored row version equals `params.row_version`.
    ///
    /// The comparison and the write happen in one `UPDATE ... WHERE id = ? AND row_version = ?`
    /// statement that sets `row_version = row_version + 1`. The written course is read back
    /// in the same transaction, so a concurrent delete cannot slip in between.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The course as written, with its new row version
    /// - `Ok(None)` - No row matched; the course is gone or its token changed
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Option<Course>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Course::update_many()
            .set(entity::course::ActiveModel {
                title: ActiveValue::Set(params.values.title),
                credits: ActiveValue::Set(params.values.credits),
                department_id: ActiveValue::Set(params.values.department_id),
                ..Default::default()
            })
            .col_expr(
                entity::course::Column::RowVersion,
                Expr::col(entity::course::Column::RowVersion).add(1),
            )
            .filter(entity::course::Column::Id.eq(params.id))
            .filter(entity::course::Column::RowVersion.eq(params.row_version))
            .exec(&txn)
            .await?;
        if result.rows_affected != 1 {
            txn.rollback().await?;
            return Ok(None);
        }

        let course = entity::prelude::Course::find_by_id(params.id)
            .find_also_related(entity::prelude::Department)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(course.map(|(course, department)| Course::from_entity(course, department)))
    }

    /// Deletes a course with its enrollments and course assignments.
    ///
    /// Runs in a single transaction and removes nothing unless the stored row version
    /// equals `row_version`.
    ///
    /// # Returns
    /// - `Ok(true)` - The course and its dependents were deleted
    /// - `Ok(false)` - No row matched; the course is gone or its token changed
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32, row_version: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let matching = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.eq(id))
            .filter(entity::course::Column::RowVersion.eq(row_version))
            .count(&txn)
            .await?;
        if matching == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::CourseAssignment::delete_many()
            .filter(entity::course_assignment::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Course::delete_many()
            .filter(entity::course::Column::Id.eq(id))
            .filter(entity::course::Column::RowVersion.eq(row_version))
            .exec(&txn)
            .await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }
}
