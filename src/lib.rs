//! Users API: CRUD over a single SQLite `users` table, plus a bulk-seed route.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use extractors::ValidatedJson;
pub use migration::apply_migrations;
pub use models::{User, UserIn};
pub use routes::app;
pub use service::{UserGateway, Validate, ValidationErrors, ValidationRule};
pub use state::AppState;
