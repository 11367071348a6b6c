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
                    .table(OfficeAssignment::Table)
                    .if_not_exists()
                    .col(integer(OfficeAssignment::InstructorId).primary_key())
                    .col(string_len(OfficeAssignment::Location, 50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_office_assignment_instructor_id")
                            .from(OfficeAssignment::Table, OfficeAssignment::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OfficeAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OfficeAssignment {
    Table,
    InstructorId,
    Location,
}
