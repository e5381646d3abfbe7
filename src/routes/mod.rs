//! Router assembly.

mod common;
mod docs;
mod users;

pub use common::status_routes;
pub use docs::{docs_routes, ApiDoc};
pub use users::user_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The full application: user routes, health/readiness, and the OpenAPI document,
/// with request tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    let body_limit = state.settings.body_limit_bytes;
    Router::new()
        .merge(status_routes(state.clone()))
        .merge(docs_routes())
        .merge(user_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
