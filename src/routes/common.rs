//! Service status routes: liveness, database readiness with pool usage, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness of the users store. `connections`/`idle` come from the pool after the probe query.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    connections: u32,
    idle: usize,
    max_connections: u32,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    seed_limit: u32,
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let reachable = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "users store not reachable");
            false
        }
    };
    let (status, label, database) = if reachable {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };
    let body = Readiness {
        status: label,
        database,
        connections: state.pool.size(),
        idle: state.pool.num_idle(),
        max_connections: state.settings.max_connections,
    };
    (status, Json(body))
}

async fn build_info(State(state): State<AppState>) -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        seed_limit: state.settings.seed_limit,
    })
}

/// GET /health, GET /ready, GET /version.
pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
