//! User handlers.

use axum::{Json, extract::State};

use storekeeper_core::UserId;

use crate::error::{AppError, Entity, Result};
use crate::extract::{ValidJson, ValidPath};
use crate::models::{NewUser, User};
use crate::state::AppState;

/// Create a user.
///
/// # Errors
///
/// Returns `AppError::Conflict` if the email is already registered.
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewUser>,
) -> Result<Json<User>> {
    let user = state
        .users()
        .insert(input)
        .await
        .map_err(|e| AppError::from_repository(e, Entity::User, "email"))?;

    Ok(Json(user))
}

/// Get a user by id.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no user has this id.
pub async fn get_user(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<UserId>,
) -> Result<Json<User>> {
    state
        .users()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Entity::User, id))
}
