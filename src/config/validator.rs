//! Reject settings the service cannot run with.

use crate::config::Settings;
use crate::error::ConfigError;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.database_url.trim().is_empty() {
        return Err(ConfigError::Validation("DATABASE_URL must not be empty".into()));
    }
    if settings.max_connections == 0 {
        return Err(ConfigError::Validation("DB_MAX_CONNECTIONS must be at least 1".into()));
    }
    if settings.seed_limit == 0 {
        return Err(ConfigError::Validation("SEED_LIMIT must be at least 1".into()));
    }
    if settings.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("BODY_LIMIT_BYTES must be at least 1".into()));
    }
    Ok(())
}
