//! Persistence gateway, seed generation and validation rules.

mod gateway;
pub mod seed;
mod validation;
pub use gateway::{UserGateway, SEED_CHUNK_ROWS};
pub use validation::{FieldError, Format, Validate, ValidationErrors, ValidationRule};
