//! Team repository implementation
//!
//! Teams group staff accounts. Deleting a team relies on the
//! `ON DELETE SET NULL` foreign key on `users.team_id`, so members are
//! detached in the same statement that removes the team.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use domain_account::Team;

use crate::error::DatabaseError;

// ============================================================================
// Row and input types
// ============================================================================

/// A team record as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a team
#[derive(Debug, Clone)]
pub struct NewTeamRecord {
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
}

/// Partial update for a team
#[derive(Debug, Clone, Default)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
}

// ============================================================================
// Repository
// ============================================================================

/// Repository for managing teams
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Creates a new TeamRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a team
    ///
    /// # Returns
    ///
    /// The created team, or DuplicateEntry if the name is taken
    pub async fn create(&self, record: NewTeamRecord) -> Result<Team, DatabaseError> {
        let mut team = Team::new(record.name);
        if let Some(description) = record.description {
            team = team.with_description(description);
        }
        if let Some(region) = record.region {
            team = team.with_region(region);
        }

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, region, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::from(team.id))
        .bind(&team.name)
        .bind(&team.description)
        .bind(&team.region)
        .bind(team.created_at)
        .bind(team.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = DatabaseError::from(e);
            if error.is_duplicate() {
                DatabaseError::duplicate("Team", "name", &team.name)
            } else {
                error
            }
        })?;

        Ok(team)
    }

    /// Retrieves a team by identifier
    pub async fn get_by_id(&self, id: Uuid) -> Result<Team, DatabaseError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, region, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Team", id))?;

        Ok(row_to_team(row))
    }

    /// Lists all teams, newest first
    pub async fn list(&self) -> Result<Vec<Team>, DatabaseError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, region, created_at, updated_at
            FROM teams
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_team).collect())
    }

    /// Applies a partial update to a team
    pub async fn update(&self, id: Uuid, changes: TeamChanges) -> Result<Team, DatabaseError> {
        let mut team = self.get_by_id(id).await?;

        if let Some(name) = changes.name {
            team.name = name;
        }
        if let Some(description) = changes.description {
            team.description = Some(description);
        }
        if let Some(region) = changes.region {
            team.region = Some(region);
        }
        team.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE teams SET
                name = $2,
                description = $3,
                region = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&team.name)
        .bind(&team.description)
        .bind(&team.region)
        .bind(team.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = DatabaseError::from(e);
            if error.is_duplicate() {
                DatabaseError::duplicate("Team", "name", &team.name)
            } else {
                error
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Team", id));
        }

        Ok(team)
    }

    /// Hard-deletes a team and returns the removed record
    ///
    /// Member accounts survive with their `team_id` cleared by the
    /// foreign key's SET NULL action.
    pub async fn delete(&self, id: Uuid) -> Result<Team, DatabaseError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            DELETE FROM teams
            WHERE id = $1
            RETURNING id, name, description, region, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Team", id))?;

        Ok(row_to_team(row))
    }
}

/// Converts a database row into the domain team entity
fn row_to_team(row: TeamRow) -> Team {
    Team {
        id: row.id.into(),
        name: row.name,
        description: row.description,
        region: row.region,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
