use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, department::DepartmentRepository},
    error::{validation::FieldError, AppError},
    model::{
        course::{
            Course, CourseConflict, CourseDetails, CourseValues, UpdateCourseParams, UpdateOutcome,
        },
        outcome::DeleteOutcome,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses with their department names
    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let repo = CourseRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a course with its enrollment count
    pub async fn get_details(&self, id: i32) -> Result<Option<CourseDetails>, AppError> {
        let repo = CourseRepository::new(self.db);

        let Some(course) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let enrollment_count = repo.count_enrollments(id).await?;

        Ok(Some(CourseDetails {
            course,
            enrollment_count,
        }))
    }

    /// Validates and creates a new course
    pub async fn create(&self, values: CourseValues) -> Result<Course, AppError> {
        self.validate(&values).await?;

        let repo = CourseRepository::new(self.db);

        repo.create(values).await.map_err(AppError::SaveFailed)
    }

    /// Validates and applies an edit guarded by the submitted row version.
    ///
    /// A lost race is not an error: it comes back as `UpdateOutcome::Conflict`,
    /// explaining either that the course was deleted or which stored values differ
    /// from the submitted ones, together with the fresh row version.
    ///
    /// # Returns
    /// - `Ok(UpdateOutcome::Updated)` - Values written, row version incremented
    /// - `Ok(UpdateOutcome::Conflict)` - Nothing written
    /// - `Err(AppError::Validation)` - Submitted values are invalid
    /// - `Err(AppError::SaveFailed)` - The update statement failed
    pub async fn update(&self, params: UpdateCourseParams) -> Result<UpdateOutcome, AppError> {
        self.validate(&params.values).await?;

        let repo = CourseRepository::new(self.db);
        let id = params.id;
        let submitted = params.values.clone();

        if let Some(course) = repo.update(params).await.map_err(AppError::SaveFailed)? {
            return Ok(UpdateOutcome::Updated(course));
        }

        let conflict = match repo.get_by_id(id).await? {
            None => CourseConflict::deleted(),
            Some(current) => CourseConflict::modified(&submitted, &current),
        };
        tracing::info!(
            "Edit of course {} rejected: row version is stale ({} differing field(s))",
            id,
            conflict.field_errors.len()
        );

        Ok(UpdateOutcome::Conflict(conflict))
    }

    /// Deletes a course if the submitted row version still matches.
    ///
    /// # Returns
    /// - `Ok(DeleteOutcome::Deleted)` - Course and its dependents removed
    /// - `Ok(DeleteOutcome::AlreadyGone)` - Course had already been deleted
    /// - `Ok(DeleteOutcome::Conflict)` - Course exists with a different row version
    /// - `Err(AppError::SaveFailed)` - The delete failed
    pub async fn delete(&self, id: i32, row_version: i32) -> Result<DeleteOutcome, AppError> {
        let repo = CourseRepository::new(self.db);

        if repo
            .delete(id, row_version)
            .await
            .map_err(AppError::SaveFailed)?
        {
            return Ok(DeleteOutcome::Deleted);
        }

        if repo.exists(id).await? {
            tracing::info!("Delete of course {} rejected: row version is stale", id);
            Ok(DeleteOutcome::Conflict)
        } else {
            Ok(DeleteOutcome::AlreadyGone)
        }
    }

    /// Runs field validation plus the department existence check
    async fn validate(&self, values: &CourseValues) -> Result<(), AppError> {
        let mut errors = values.validate();

        if let Some(department_id) = values.department_id {
            if !DepartmentRepository::new(self.db)
                .exists(department_id)
                .await?
            {
                errors.push(FieldError::new(
                    "department_id",
                    "The selected department does not exist.",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
