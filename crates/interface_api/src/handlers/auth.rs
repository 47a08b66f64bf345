//! Authentication handlers

use axum::extract::State;
use axum::{Extension, Json};
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

use core_kernel::UserId;
use domain_account::verify_password;
use infra_db::DatabaseError;

use super::require;
use crate::auth::{create_token, Claims};
use crate::dto::auth::*;
use crate::dto::users::UserResponse;
use crate::error::ApiError;
use crate::AppState;

/// Authenticates a user and issues a JWT
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller; both come back as a plain 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = require(body.username, "username")?;
    let password = require(body.password, "password")?;

    let user = state
        .users
        .get_by_username(&username)
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound(_) => ApiError::Unauthorized,
            other => ApiError::from(other),
        })?;

    if !user.is_active {
        warn!(username = %username, "Login attempt for deactivated account");
        return Err(ApiError::Unauthorized);
    }

    let verified = verify_password(&password, &user.password_hash)
        .map_err(|_| ApiError::Internal("Internal server error".to_string()))?;
    if !verified {
        return Err(ApiError::Unauthorized);
    }

    let token = create_token(
        &user.id.to_string(),
        vec![user.role.as_str().to_string()],
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|_| ApiError::Internal("Failed to issue token".to_string()))?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Returns the authenticated user's own record
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = UserId::from_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;
    let user = state.users.get_by_id(Uuid::from(user_id)).await?;

    Ok(Json(user.into()))
}
