//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod enquiry_repo;
pub mod location_repo;
pub mod role_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use enquiry_repo::EnquiryRepo;
pub use location_repo::LocationRepo;
pub use role_repo::RoleRepo;
pub use user_repo::UserRepo;
