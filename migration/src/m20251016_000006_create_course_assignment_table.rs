use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251016_000001_create_instructor_table::Instructor,
    m20251016_000003_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseAssignment::Table)
                    .if_not_exists()
                    .col(integer(CourseAssignment::InstructorId))
                    .col(integer(CourseAssignment::CourseId))
                    .primary_key(
                        Index::create()
                            .col(CourseAssignment::InstructorId)
                            .col(CourseAssignment::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_assignment_instructor_id")
                            .from(CourseAssignment::Table, CourseAssignment::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_assignment_course_id")
                            .from(CourseAssignment::Table, CourseAssignment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseAssignment {
    Table,
    InstructorId,
    CourseId,
}
