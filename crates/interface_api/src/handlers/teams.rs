//! Team handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use infra_db::{NewTeamRecord, TeamChanges};

use super::require;
use crate::dto::teams::*;
use crate::error::ApiError;
use crate::AppState;

/// Creates a new team
pub async fn create_team(
    State(state): State<AppState>,
    Json(body): Json<CreateTeamBody>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    body.validate()?;

    let record = NewTeamRecord {
        name: require(body.name, "name")?,
        description: body.description,
        region: body.region,
    };

    let team = state.teams.create(record).await?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// Lists all teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.list().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Gets a team by ID
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.get_by_id(id).await?;
    Ok(Json(team.into()))
}

/// Updates a team
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTeamBody>,
) -> Result<Json<TeamResponse>, ApiError> {
    body.validate()?;

    let changes = TeamChanges {
        name: body.name,
        description: body.description,
        region: body.region,
    };

    let team = state.teams.update(id, changes).await?;

    Ok(Json(team.into()))
}

/// Deletes a team, returning the removed record
///
/// Members keep their accounts; the database detaches them from the
/// deleted team.
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.delete(id).await?;
    Ok(Json(team.into()))
}
