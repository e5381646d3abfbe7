//! Runtime settings for the users service.

pub const DEFAULT_DATABASE_URL: &str = "sqlite://users_database.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;
pub const DEFAULT_SEED_LIMIT: u32 = 1000;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    /// Pool size. The default of one keeps a single shared connection.
    pub max_connections: u32,
    /// Largest `count` accepted by the bulk-seed route.
    pub seed_limit: u32,
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_limit: DEFAULT_SEED_LIMIT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
