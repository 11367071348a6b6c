pub use sea_orm_migration::prelude::*;

mod m20251016_000001_create_instructor_table;
mod m20251016_000002_create_department_table;
mod m20251016_000003_create_course_table;
mod m20251016_000004_create_student_table;
mod m20251016_000005_create_enrollment_table;
mod m20251016_000006_create_course_assignment_table;
mod m20251016_000007_create_office_assignment_table;
mod m20251016_000008_seed_school_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_create_instructor_table::Migration),
            Box::new(m20251016_000002_create_department_table::Migration),
            Box::new(m20251016_000003_create_course_table::Migration),
            Box::new(m20251016_000004_create_student_table::Migration),
            Box::new(m20251016_000005_create_enrollment_table::Migration),
            Box::new(m20251016_000006_create_course_assignment_table::Migration),
            Box::new(m20251016_000007_create_office_assignment_table::Migration),
            Box::new(m20251016_000008_seed_school_data::Migration),
        ]
    }
}
