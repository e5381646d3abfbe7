//! OpenAPI document for the user routes.

use crate::handlers::users;
use crate::models::{User, UserIn};
use crate::response::{Message, SeedReport};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        users::seed_users,
        users::create_user,
        users::list_users,
        users::read_user,
        users::update_user,
        users::delete_user
    ),
    components(schemas(User, UserIn, Message, SeedReport))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json.
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi))
}
