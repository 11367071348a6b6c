//! HTTP request handlers.
//!
//! Controllers convert DTOs to params, call a service and map its result to a status
//! code and DTO body. Every handler carries a `#[utoipa::path]` annotation so the
//! router can assemble the OpenAPI document from them.

pub mod course;
pub mod department;
pub mod instructor;

#[cfg(test)]
mod test;
