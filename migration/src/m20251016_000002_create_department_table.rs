use sea_orm_migration::{prelude::*, schema::*};

use super::m20251016_000001_create_instructor_table::Instructor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string_len(Department::Name, 50))
                    .col(double(Department::Budget))
                    .col(date(Department::StartDate))
                    .col(integer_null(Department::InstructorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_instructor_id")
                            .from(Department::Table, Department::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Department {
    Table,
    Id,
    Name,
    Budget,
    StartDate,
    InstructorId,
}
