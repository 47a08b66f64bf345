//! Back-office user accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{TeamId, UserId};

use crate::error::AccountError;

/// Access role of a back-office user.
///
/// Roles are ordered by privilege: `Admin` manages accounts and teams,
/// `Manager` additionally runs billing cycles, `Staff` handles the
/// day-to-day customer and invoice work. The string forms are lowercase
/// because they travel inside token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    /// All roles, in descending order of privilege
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "staff" => Ok(Role::Staff),
            other => Err(AccountError::unknown_role(other)),
        }
    }
}

/// An operator account for the back office.
///
/// `password_hash` holds an Argon2 PHC string produced by
/// [`crate::password::hash_password`]; the plaintext never reaches this
/// struct. Response shaping at the API boundary decides what is exposed,
/// so the hash is a plain field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: Role,
    pub team_id: Option<TeamId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates an active user with no team assignment
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new_v7(),
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
            password_hash: password_hash.into(),
            role,
            team_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assigns the user to a team
    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Marks the account inactive. Inactive accounts keep their history
    /// but can no longer log in.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_forms() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::Manager.to_string(), "manager");
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
    }

    #[test]
    fn test_role_rejects_unknown() {
        let err = "Superuser".parse::<Role>().unwrap_err();
        assert!(matches!(err, AccountError::UnknownRole(_)));
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("priya.n", "priya@example.net", "Priya Nair", "$argon2id$stub", Role::Staff);

        assert_eq!(user.username, "priya.n");
        assert_eq!(user.role, Role::Staff);
        assert!(user.team_id.is_none());
        assert!(user.is_active);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::new("ops", "ops@example.net", "Ops User", "hash", Role::Manager);
        user.deactivate();
        assert!(!user.is_active);
    }
}
