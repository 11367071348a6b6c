//! Data transfer objects shared by the server API and the client.

pub mod api;
pub mod course;
pub mod department;
pub mod instructor;
