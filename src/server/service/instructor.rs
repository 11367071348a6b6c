use sea_orm::DatabaseConnection;

use crate::server::{
    data::instructor::InstructorRepository,
    error::AppError,
    model::{
        instructor::{Instructor, InstructorDetails, InstructorParams},
        outcome::DeleteOutcome,
    },
};

pub struct InstructorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all instructors ordered by last name
    pub async fn get_all(&self) -> Result<Vec<Instructor>, AppError> {
        let repo = InstructorRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets an instructor with office and taught courses
    pub async fn get_details(&self, id: i32) -> Result<Option<InstructorDetails>, AppError> {
        let repo = InstructorRepository::new(self.db);

        Ok(repo.get_details(id).await?)
    }

    /// Validates and creates a new instructor
    pub async fn create(&self, params: InstructorParams) -> Result<Instructor, AppError> {
        validate(&params)?;

        let repo = InstructorRepository::new(self.db);

        repo.create(params).await.map_err(AppError::SaveFailed)
    }

    /// Validates and updates an instructor
    /// Returns None if the instructor doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: InstructorParams,
    ) -> Result<Option<Instructor>, AppError> {
        validate(&params)?;

        let repo = InstructorRepository::new(self.db);

        repo.update(id, params).await.map_err(AppError::SaveFailed)
    }

    /// Deletes an instructor along with their office and course assignments
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, AppError> {
        let repo = InstructorRepository::new(self.db);

        let deleted = repo.delete(id).await.map_err(AppError::SaveFailed)?;

        Ok(if deleted {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::AlreadyGone
        })
    }
}

fn validate(params: &InstructorParams) -> Result<(), AppError> {
    let errors = params.validate();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
