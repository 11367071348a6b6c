use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::server::model::department::Department;

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all departments ordered by name
    pub async fn get_all(&self) -> Result<Vec<Department>, DbErr> {
        let departments = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Name)
            .all(self.db)
            .await?;

        Ok(departments
            .into_iter()
            .map(Department::from_entity)
            .collect())
    }

    /// Checks whether a department with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find()
            .filter(entity::department::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
