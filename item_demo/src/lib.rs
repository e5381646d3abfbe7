//! Item validation demo: `POST /items/` validates an item and echoes it back.

use axum::{routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use users_api::{Validate, ValidatedJson, ValidationErrors, ValidationRule};

const NAME: ValidationRule = ValidationRule::max_length(50);
const PRICE: ValidationRule = ValidationRule::above(0.0, 100_000.0);
const DESCRIPTION: ValidationRule = ValidationRule::max_length(1000);
const TAX: ValidationRule = ValidationRule::range(0.0, 10.0);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tax: f64,
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_str("name", &self.name, &NAME);
        errors.check_number("price", self.price, &PRICE);
        if let Some(description) = &self.description {
            errors.check_str("description", description, &DESCRIPTION);
        }
        errors.check_number("tax", self.tax, &TAX);
        errors.into_result()
    }
}

#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    pub item: Item,
}

pub async fn create_item(ValidatedJson(item): ValidatedJson<Item>) -> Json<ItemEnvelope> {
    tracing::debug!(name = %item.name, "item accepted");
    Json(ItemEnvelope { item })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router() -> Router {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/", post(create_item))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}
