use sea_orm_migration::prelude::*;

use super::{
    m20251016_000001_create_instructor_table::Instructor,
    m20251016_000002_create_department_table::Department,
    m20251016_000003_create_course_table::Course, m20251016_000004_create_student_table::Student,
    m20251016_000005_create_enrollment_table::Enrollment,
    m20251016_000006_create_course_assignment_table::CourseAssignment,
    m20251016_000007_create_office_assignment_table::OfficeAssignment,
};

/// (id, last_name, first_mid_name, hire_date)
const INSTRUCTORS: [(i32, &str, &str, &str); 5] = [
    (1, "Abercrombie", "Kim", "1995-03-11"),
    (2, "Fakhouri", "Fadi", "2002-07-06"),
    (3, "Harui", "Roger", "1998-07-01"),
    (4, "Kapoor", "Candace", "2001-01-15"),
    (5, "Zheng", "Roger", "2004-02-12"),
];

/// (id, name, budget, start_date, administrator)
const DEPARTMENTS: [(i32, &str, f64, &str, i32); 4] = [
    (1, "English", 350_000.0, "2007-09-01", 1),
    (2, "Mathematics", 100_000.0, "2007-09-01", 2),
    (3, "Engineering", 350_000.0, "2007-09-01", 3),
    (4, "Economics", 100_000.0, "2007-09-01", 4),
];

/// (id, title, credits, department_id)
const COURSES: [(i32, &str, i32, i32); 7] = [
    (1050, "Chemistry", 3, 3),
    (4022, "Microeconomics", 3, 4),
    (4041, "Macroeconomics", 3, 4),
    (1045, "Calculus", 4, 2),
    (3141, "Trigonometry", 4, 2),
    (2021, "Composition", 3, 1),
    (2042, "Literature", 4, 1),
];

/// (id, last_name, first_mid_name, enrollment_date)
const STUDENTS: [(i32, &str, &str, &str); 4] = [
    (1, "Alexander", "Carson", "2010-09-01"),
    (2, "Alonso", "Meredith", "2012-09-01"),
    (3, "Anand", "Arturo", "2013-09-01"),
    (4, "Barzdukas", "Gytis", "2012-09-01"),
];

/// (course_id, student_id, grade)
const ENROLLMENTS: [(i32, i32, Option<&str>); 6] = [
    (1050, 1, Some("A")),
    (4022, 1, Some("C")),
    (4041, 1, Some("B")),
    (1045, 2, Some("B")),
    (3141, 2, Some("F")),
    (1050, 3, None),
];

/// (instructor_id, course_id)
const COURSE_ASSIGNMENTS: [(i32, i32); 8] = [
    (3, 1050),
    (5, 1050),
    (5, 4022),
    (4, 4041),
    (2, 1045),
    (3, 3141),
    (1, 2021),
    (1, 2042),
];

/// (instructor_id, location)
const OFFICE_ASSIGNMENTS: [(i32, &str); 3] =
    [(2, "Smith 17"), (3, "Gowan 27"), (4, "Thompson 304")];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut instructors = Query::insert();
        instructors.into_table(Instructor::Table).columns([
            Instructor::Id,
            Instructor::LastName,
            Instructor::FirstMidName,
            Instructor::HireDate,
        ]);
        for (id, last_name, first_mid_name, hire_date) in INSTRUCTORS {
            instructors.values_panic([
                id.into(),
                last_name.into(),
                first_mid_name.into(),
                hire_date.into(),
            ]);
        }
        manager.exec_stmt(instructors).await?;

        let mut departments = Query::insert();
        departments.into_table(Department::Table).columns([
            Department::Id,
            Department::Name,
            Department::Budget,
            Department::StartDate,
            Department::InstructorId,
        ]);
        for (id, name, budget, start_date, administrator) in DEPARTMENTS {
            departments.values_panic([
                id.into(),
                name.into(),
                budget.into(),
                start_date.into(),
                administrator.into(),
            ]);
        }
        manager.exec_stmt(departments).await?;

        let mut courses = Query::insert();
        courses.into_table(Course::Table).columns([
            Course::Id,
            Course::Title,
            Course::Credits,
            Course::DepartmentId,
            Course::RowVersion,
        ]);
        for (id, title, credits, department_id) in COURSES {
            courses.values_panic([
                id.into(),
                title.into(),
                credits.into(),
                department_id.into(),
                1i32.into(),
            ]);
        }
        manager.exec_stmt(courses).await?;

        let mut students = Query::insert();
        students.into_table(Student::Table).columns([
            Student::Id,
            Student::LastName,
            Student::FirstMidName,
            Student::EnrollmentDate,
        ]);
        for (id, last_name, first_mid_name, enrollment_date) in STUDENTS {
            students.values_panic([
                id.into(),
                last_name.into(),
                first_mid_name.into(),
                enrollment_date.into(),
            ]);
        }
        manager.exec_stmt(students).await?;

        let mut enrollments = Query::insert();
        enrollments.into_table(Enrollment::Table).columns([
            Enrollment::CourseId,
            Enrollment::StudentId,
            Enrollment::Grade,
        ]);
        for (course_id, student_id, grade) in ENROLLMENTS {
            enrollments.values_panic([course_id.into(), student_id.into(), grade.into()]);
        }
        manager.exec_stmt(enrollments).await?;

        let mut course_assignments = Query::insert();
        course_assignments
            .into_table(CourseAssignment::Table)
            .columns([CourseAssignment::InstructorId, CourseAssignment::CourseId]);
        for (instructor_id, course_id) in COURSE_ASSIGNMENTS {
            course_assignments.values_panic([instructor_id.into(), course_id.into()]);
        }
        manager.exec_stmt(course_assignments).await?;

        let mut office_assignments = Query::insert();
        office_assignments
            .into_table(OfficeAssignment::Table)
            .columns([OfficeAssignment::InstructorId, OfficeAssignment::Location]);
        for (instructor_id, location) in OFFICE_ASSIGNMENTS {
            office_assignments.values_panic([instructor_id.into(), location.into()]);
        }
        manager.exec_stmt(office_assignments).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first.
        manager
            .exec_stmt(Query::delete().from_table(OfficeAssignment::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(CourseAssignment::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Enrollment::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Student::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Course::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Department::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Instructor::Table).to_owned())
            .await
    }
}
