//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Validation rules and the
//! concurrency conflict messages live next to the types they describe.

pub mod course;
pub mod department;
pub mod instructor;
pub mod outcome;
