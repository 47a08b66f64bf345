//! User repository implementation
//!
//! This module provides database access for staff accounts. Passwords
//! arrive in plain text from the request layer and are hashed here, so
//! a hash is the only credential form that ever reaches the database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use core_kernel::TeamId;
use domain_account::{hash_password, Role, User};

use crate::error::DatabaseError;

// ============================================================================
// Row and input types
// ============================================================================

/// A user record as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
    pub team_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user account
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    pub role: Role,
    pub team_id: Option<Uuid>,
}

/// Partial update for a user account
///
/// `team_id` is doubly optional: `None` leaves the assignment alone,
/// `Some(None)` detaches the user from their team, `Some(Some(id))`
/// reassigns them.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Plain-text replacement password, hashed before storage
    pub password: Option<String>,
    pub role: Option<Role>,
    pub team_id: Option<Option<Uuid>>,
    pub is_active: Option<bool>,
}

// ============================================================================
// Repository
// ============================================================================

/// Repository for managing staff accounts
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a user account, hashing the password before storage
    ///
    /// # Returns
    ///
    /// The created user, or DuplicateEntry if the username is taken
    pub async fn create(&self, record: NewUserRecord) -> Result<User, DatabaseError> {
        let password_hash =
            hash_password(&record.password).map_err(|e| DatabaseError::HashingFailed(e.to_string()))?;

        let mut user = User::new(
            record.username,
            record.email,
            record.full_name,
            password_hash,
            record.role,
        );
        if let Some(team_id) = record.team_id {
            user = user.with_team(TeamId::from(team_id));
        }

        sqlx::query(
            r#"
            INSERT INTO users (
                id, username, email, full_name, password_hash,
                role, team_id, is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(Uuid::from(user.id))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.team_id.map(Uuid::from))
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = DatabaseError::from(e);
            if error.is_duplicate() {
                DatabaseError::duplicate("User", "username", &user.username)
            } else {
                error
            }
        })?;

        Ok(user)
    }

    /// Retrieves a user by identifier
    pub async fn get_by_id(&self, id: Uuid) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, username, email, full_name, password_hash,
                role, team_id, is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("User", id))?;

        row_to_user(row)
    }

    /// Retrieves a user by username for credential verification
    pub async fn get_by_username(&self, username: &str) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, username, email, full_name, password_hash,
                role, team_id, is_active, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("User", username))?;

        row_to_user(row)
    }

    /// Lists all users, newest first
    pub async fn list(&self) -> Result<Vec<User>, DatabaseError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, username, email, full_name, password_hash,
                role, team_id, is_active, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_user).collect()
    }

    /// Applies a partial update to a user account
    ///
    /// A replacement password is hashed before storage.
    pub async fn update(&self, id: Uuid, changes: UserChanges) -> Result<User, DatabaseError> {
        let mut user = self.get_by_id(id).await?;

        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(full_name) = changes.full_name {
            user.full_name = full_name;
        }
        if let Some(password) = changes.password {
            user.password_hash =
                hash_password(&password).map_err(|e| DatabaseError::HashingFailed(e.to_string()))?;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(team_id) = changes.team_id {
            user.team_id = team_id.map(TeamId::from);
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                full_name = $4,
                password_hash = $5,
                role = $6,
                team_id = $7,
                is_active = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.team_id.map(Uuid::from))
        .bind(user.is_active)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = DatabaseError::from(e);
            if error.is_duplicate() {
                DatabaseError::duplicate("User", "username", &user.username)
            } else {
                error
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("User", id));
        }

        Ok(user)
    }

    /// Hard-deletes a user and returns the removed record
    pub async fn delete(&self, id: Uuid) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING
                id, username, email, full_name, password_hash,
                role, team_id, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("User", id))?;

        row_to_user(row)
    }
}

/// Converts a database row into the domain user entity
fn row_to_user(row: UserRow) -> Result<User, DatabaseError> {
    let role = Role::from_str(&row.role)
        .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

    Ok(User {
        id: row.id.into(),
        username: row.username,
        email: row.email,
        full_name: row.full_name,
        password_hash: row.password_hash,
        role,
        team_id: row.team_id.map(TeamId::from),
        is_active: row.is_active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_user_parses_role() {
        let row = UserRow {
            id: Uuid::now_v7(),
            username: "priya.n".to_string(),
            email: "priya@example.com".to_string(),
            full_name: "Priya Natarajan".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: "manager".to_string(),
            team_id: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let user = row_to_user(row).unwrap();
        assert_eq!(user.role, Role::Manager);
        assert!(user.team_id.is_none());
    }

    #[test]
    fn test_row_to_user_rejects_unknown_role() {
        let row = UserRow {
            id: Uuid::now_v7(),
            username: "x".to_string(),
            email: "x@example.com".to_string(),
            full_name: "X".to_string(),
            password_hash: "hash".to_string(),
            role: "superuser".to_string(),
            team_id: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let error = row_to_user(row).unwrap_err();
        assert!(matches!(error, DatabaseError::SerializationError(_)));
    }
}
