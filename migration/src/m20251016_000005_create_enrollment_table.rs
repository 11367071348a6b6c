use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251016_000003_create_course_table::Course, m20251016_000004_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::CourseId))
                    .col(integer(Enrollment::StudentId))
                    .col(string_null(Enrollment::Grade))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course_id")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student_id")
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    CourseId,
    StudentId,
    Grade,
}
