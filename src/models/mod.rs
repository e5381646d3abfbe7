//! Request and response shapes.

mod user;
pub use user::{User, UserIn};
