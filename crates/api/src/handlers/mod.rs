pub mod auth;
pub mod category;
pub mod enquiry;
pub mod location;
