//! Operational teams
//!
//! Teams group back-office users, typically by service region. Deleting
//! a team detaches its members rather than removing them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::TeamId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TeamId::new_v7(),
            name: name.into(),
            description: None,
            region: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team() {
        let team = Team::new("South Zone Field Ops")
            .with_description("Installations and repairs south of the river")
            .with_region("Bengaluru South");

        assert_eq!(team.name, "South Zone Field Ops");
        assert_eq!(team.region.as_deref(), Some("Bengaluru South"));
        assert_eq!(team.created_at, team.updated_at);
    }
}
