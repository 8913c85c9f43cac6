//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts where the entity is written by the API

pub mod category;
pub mod enquiry;
pub mod location;
pub mod role;
pub mod user;
