mod create;
mod delete;
mod details;
mod edit;
mod form;
mod list;

pub use create::CreateInstructor;
pub use delete::DeleteInstructor;
pub use details::InstructorDetails;
pub use edit::EditInstructor;
pub use list::Instructors;
