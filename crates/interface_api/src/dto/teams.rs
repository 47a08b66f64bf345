//! Team DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_account::Team;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamBody {
    #[validate(length(min = 2, message = "Team name must be at least 2 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamBody {
    #[validate(length(min = 2, message = "Team name must be at least 2 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.into(),
            name: team.name,
            description: team.description,
            region: team.region,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}
