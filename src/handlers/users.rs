//! User handlers: create, list, read, update, delete, and bulk seed. Each issues one gateway call.

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::models::{User, UserIn};
use crate::response::{Message, SeedReport};
use crate::service::{seed, UserGateway};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn parse_count(count_str: &str, limit: u32) -> Result<u32, AppError> {
    let count: u32 = count_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid count '{}'", count_str)))?;
    if count == 0 || count > limit {
        return Err(AppError::BadRequest(format!(
            "count must be between 1 and {}",
            limit
        )));
    }
    Ok(count)
}

/// Insert `count` generated users in one transaction.
#[utoipa::path(
    get,
    path = "/fake_users/{count}",
    params(("count" = u32, Path, description = "Number of users to generate")),
    responses(
        (status = 200, description = "Users inserted", body = SeedReport),
        (status = 400, description = "Count is zero, malformed, or above the seed limit")
    )
)]
pub async fn seed_users(
    State(state): State<AppState>,
    Path(count_str): Path<String>,
) -> Result<Json<SeedReport>, AppError> {
    let count = parse_count(&count_str, state.settings.seed_limit)?;
    let users = seed::fake_users(count)?;
    let inserted = UserGateway::insert_many(&state.pool, &users).await?;
    tracing::info!(count, inserted, "seeded fake users");
    Ok(Json(SeedReport::new(count)))
}

#[utoipa::path(
    post,
    path = "/users/",
    request_body = UserIn,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 422, description = "Body failed validation")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<UserIn>,
) -> Result<Json<User>, AppError> {
    let id = UserGateway::insert(&state.pool, &user).await?;
    tracing::debug!(id, "user created");
    Ok(Json(User::from_input(id, user)))
}

#[utoipa::path(
    get,
    path = "/users/",
    responses((status = 200, description = "All users ordered by id", body = Vec<User>))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserGateway::select_all(&state.pool).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with this id")
    )
)]
pub async fn read_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserGateway::select_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UserIn,
    responses(
        (status = 200, description = "The user with its new values", body = User),
        (status = 404, description = "No user with this id"),
        (status = 422, description = "Body failed validation")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidatedJson(user): ValidatedJson<UserIn>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id_str)?;
    let affected = UserGateway::update_by_id(&state.pool, id, &user).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    Ok(Json(User::from_input(id, user)))
}

/// Idempotent: answers the same whether or not the row existed.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses((status = 200, description = "Deleted, or was already absent", body = Message))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id_str)?;
    let affected = UserGateway::delete_by_id(&state.pool, id).await?;
    tracing::debug!(id, affected, "user delete");
    Ok(Json(Message::new("User deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_bounds() {
        assert_eq!(parse_count("3", 10).unwrap(), 3);
        assert_eq!(parse_count("10", 10).unwrap(), 10);
        assert!(parse_count("0", 10).is_err());
        assert!(parse_count("11", 10).is_err());
        assert!(parse_count("-1", 10).is_err());
        assert!(parse_count("many", 10).is_err());
    }

    #[test]
    fn id_must_be_integer() {
        assert_eq!(parse_id("-4").unwrap(), -4);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
    }
}
