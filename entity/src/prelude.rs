pub use super::course::Entity as Course;
pub use super::course_assignment::Entity as CourseAssignment;
pub use super::department::Entity as Department;
pub use super::enrollment::Entity as Enrollment;
pub use super::instructor::Entity as Instructor;
pub use super::office_assignment::Entity as OfficeAssignment;
pub use super::student::Entity as Student;
