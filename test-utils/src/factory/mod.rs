//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database; see `fixture` for
//! in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let department = factory::create_department(&db).await?;
//!     let course = factory::create_course(&db, Some(department.id)).await?;
//!
//!     // Create with all dependencies
//!     let (instructor, department, course) =
//!         factory::helpers::create_assigned_course(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let course = factory::course::CourseFactory::new(&db)
//!     .title("Calculus II")
//!     .credits(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `course` - Create course entities
//! - `course_assignment` - Assign instructors to courses
//! - `department` - Create department entities
//! - `enrollment` - Enroll students in courses
//! - `instructor` - Create instructor entities
//! - `office_assignment` - Give instructors an office
//! - `student` - Create student entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod course;
pub mod course_assignment;
pub mod department;
pub mod enrollment;
pub mod helpers;
pub mod instructor;
pub mod office_assignment;
pub mod student;

pub use course::create_course;
pub use course_assignment::create_course_assignment;
pub use department::create_department;
pub use enrollment::create_enrollment;
pub use instructor::create_instructor;
pub use office_assignment::create_office_assignment;
pub use student::create_student;
