//! User CRUD and bulk-seed routes. The collection answers with and without a trailing slash.

use crate::handlers::{create_user, delete_user, list_users, read_user, seed_users, update_user};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/fake_users/:count", get(seed_users))
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/:user_id",
            get(read_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}
