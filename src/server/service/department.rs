use sea_orm::DatabaseConnection;

use crate::server::{
    data::department::DepartmentRepository, error::AppError, model::department::Department,
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all departments for populating course forms
    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        let repo = DepartmentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
