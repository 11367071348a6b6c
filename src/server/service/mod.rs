//! Business logic layer.
//!
//! Services validate input, orchestrate repository calls and turn lost optimistic
//! concurrency races into explicit outcomes. They own no state beyond the borrowed
//! database connection.

pub mod course;
pub mod department;
pub mod instructor;

#[cfg(test)]
mod test;
