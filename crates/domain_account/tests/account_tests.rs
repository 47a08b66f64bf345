//! Comprehensive tests for domain_account

use domain_account::{hash_password, verify_password, Role, Team, User};

fn staff_user(username: &str) -> User {
    User::new(
        username,
        format!("{username}@backoffice.example.net"),
        "Test Operator",
        "$argon2id$v=19$unused",
        Role::Staff,
    )
}

// ============================================================================
// Role Tests
// ============================================================================

mod role_tests {
    use super::*;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(Role::ALL.len(), 3);
        assert_eq!(Role::ALL[0], Role::Admin);
    }

    #[test]
    fn test_string_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_wire_form_is_lowercase() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"manager\"");

        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn test_capitalized_form_rejected() {
        assert!("Admin".parse::<Role>().is_err());
    }
}

// ============================================================================
// User Tests
// ============================================================================

mod user_tests {
    use super::*;

    #[test]
    fn test_new_user_is_active_and_teamless() {
        let user = staff_user("kavya.m");

        assert!(user.is_active);
        assert!(user.team_id.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_team_assignment() {
        let team = Team::new("North Zone NOC");
        let user = staff_user("arjun.s").with_team(team.id);

        assert_eq!(user.team_id, Some(team.id));
    }

    #[test]
    fn test_deactivate_touches_updated_at() {
        let mut user = staff_user("retired.op");
        let created = user.created_at;

        std::thread::sleep(std::time::Duration::from_millis(1));
        user.deactivate();

        assert!(!user.is_active);
        assert!(user.updated_at > created);
    }

    #[test]
    fn test_serde_round_trip() {
        let user = staff_user("roundtrip").with_team(Team::new("QA").id);

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, user.id);
        assert_eq!(back.role, user.role);
        assert_eq!(back.team_id, user.team_id);
        assert_eq!(back.password_hash, user.password_hash);
    }
}

// ============================================================================
// Credential Tests
// ============================================================================

mod credential_tests {
    use super::*;

    #[test]
    fn test_stored_hash_verifies_original_only() {
        let hash = hash_password("field-ops-2025").unwrap();
        let user = User::new("verify.me", "v@example.net", "Verify Me", hash, Role::Manager);

        assert!(verify_password("field-ops-2025", &user.password_hash).unwrap());
        assert!(!verify_password("field-ops-2024", &user.password_hash).unwrap());
    }

    #[test]
    fn test_hash_is_phc_encoded() {
        let hash = hash_password("pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.matches('$').count() >= 5);
    }
}
