use sea_orm_migration::{prelude::*, schema::*};

use super::m20251016_000002_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string_len(Course::Title, 50))
                    .col(integer(Course::Credits))
                    .col(integer_null(Course::DepartmentId))
                    .col(integer(Course::RowVersion).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_department_id")
                            .from(Course::Table, Course::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Title,
    Credits,
    DepartmentId,
    RowVersion,
}
