//! User handlers
//!
//! Creating and deleting accounts requires the admin role; reading and
//! updating are open to any authenticated user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use domain_account::Role;
use infra_db::{NewUserRecord, UserChanges};

use super::require;
use crate::auth::{has_role, roles, Claims};
use crate::dto::users::*;
use crate::error::ApiError;
use crate::AppState;

/// Creates a new user account (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    require_admin(&claims)?;
    body.validate()?;

    let record = NewUserRecord {
        username: require(body.username, "username")?,
        email: require(body.email, "email")?,
        full_name: require(body.full_name, "fullName")?,
        password: require(body.password, "password")?,
        role: parse_role(&require(body.role, "role")?)?,
        team_id: body.team_id,
    };

    let user = state.users.create(record).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists all user accounts
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Gets a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.get_by_id(id).await?;
    Ok(Json(user.into()))
}

/// Updates a user account
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<UserResponse>, ApiError> {
    body.validate()?;

    let role = body.role.as_deref().map(parse_role).transpose()?;
    let changes = UserChanges {
        username: body.username,
        email: body.email,
        full_name: body.full_name,
        password: body.password,
        role,
        team_id: body.team_id,
        is_active: body.is_active,
    };

    let user = state.users.update(id, changes).await?;

    Ok(Json(user.into()))
}

/// Deletes a user account (admin only), returning the removed record
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    require_admin(&claims)?;

    let user = state.users.delete(id).await?;
    Ok(Json(user.into()))
}

fn require_admin(claims: &Claims) -> Result<(), ApiError> {
    if has_role(claims, roles::ADMIN) {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Admin role required".to_string()))
    }
}

fn parse_role(value: &str) -> Result<Role, ApiError> {
    Role::from_str(value).map_err(|e| ApiError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_role(role: &str) -> Claims {
        Claims {
            sub: "USR-1".to_string(),
            roles: vec![role.to_string()],
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_require_admin_rejects_staff() {
        assert!(require_admin(&claims_with_role("admin")).is_ok());
        assert!(matches!(
            require_admin(&claims_with_role("staff")),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_parse_role_rejects_unknown() {
        assert_eq!(parse_role("manager").unwrap(), Role::Manager);
        assert!(parse_role("superuser").is_err());
    }
}
