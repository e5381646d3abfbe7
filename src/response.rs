//! Fixed-shape response bodies.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"message": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Bulk-seed confirmation. The key is spelled `mesage` on the wire.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedReport {
    #[serde(rename = "mesage")]
    pub message: String,
}

impl SeedReport {
    pub fn new(count: u32) -> Self {
        Self {
            message: format!("{} fake users create", count),
        }
    }
}
