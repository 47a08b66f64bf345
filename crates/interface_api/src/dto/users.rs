//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_account::User;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub username: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub username: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    pub role: Option<String>,
    /// Absent key leaves the team alone; an explicit null detaches it
    #[serde(default, deserialize_with = "deserialize_some")]
    pub team_id: Option<Option<Uuid>>,
    pub is_active: Option<bool>,
}

fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// A user on the wire, password hash never included
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub team_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: user.role.as_str().to_string(),
            team_id: user.team_id.map(Uuid::from),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_account::Role;

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            "ravi".to_string(),
            "ravi@example.com".to_string(),
            "Ravi Kumar".to_string(),
            "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            Role::Staff,
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["username"], "ravi");
        assert_eq!(json["role"], "staff");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_update_body_team_tri_state() {
        let absent: UpdateUserBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.team_id, None);

        let detached: UpdateUserBody = serde_json::from_str(r#"{"teamId": null}"#).unwrap();
        assert_eq!(detached.team_id, Some(None));

        let id = Uuid::now_v7();
        let assigned: UpdateUserBody =
            serde_json::from_str(&format!(r#"{{"teamId": "{}"}}"#, id)).unwrap();
        assert_eq!(assigned.team_id, Some(Some(id)));
    }
}
