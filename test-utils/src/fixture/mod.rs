//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They provide
//! consistent defaults for factory builders and in-memory models for unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let course = fixture::course::entity();
//!
//! // Create with custom fields
//! let calculus = fixture::course::entity_builder()
//!     .title("Calculus")
//!     .credits(4)
//!     .build();
//! ```

pub mod course;
pub mod instructor;

pub use course::{entity as course_entity, entity_builder as course_entity_builder};
pub use instructor::{entity as instructor_entity, entity_builder as instructor_entity_builder};
