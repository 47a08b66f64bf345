//! Account domain errors

use thiserror::Error;

/// Errors raised by account entities and credential handling
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl AccountError {
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole(role.into())
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccountError::unknown_role("superuser");
        assert_eq!(err.to_string(), "Unknown role: superuser");

        let err = AccountError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid username or password");
    }
}
