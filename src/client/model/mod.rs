pub mod cache;
pub mod delete_notice;
pub mod error;
