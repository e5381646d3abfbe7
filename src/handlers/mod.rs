//! HTTP handlers for user CRUD and bulk seeding.

pub mod users;
pub use users::*;
