//! Domain types, constants, and pure validation for the Pixisphere backend.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod enquiry;
pub mod enquiry_status;
pub mod error;
pub mod naming;
pub mod pagination;
pub mod roles;
pub mod types;
