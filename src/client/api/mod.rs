#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod course;

#[cfg(feature = "web")]
pub mod department;

#[cfg(feature = "web")]
pub mod instructor;
