mod create;
mod delete;
mod details;
mod edit;
mod form;
mod list;

pub use create::CreateCourse;
pub use delete::DeleteCourse;
pub use details::CourseDetails;
pub use edit::EditCourse;
pub use list::Courses;
