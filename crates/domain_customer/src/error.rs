//! Customer domain errors

use thiserror::Error;

/// Errors that can occur in the customer domain
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Customer with the given ID was not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Plan type string did not match the catalog
    #[error("Unknown plan type: {0}")]
    UnknownPlan(String),

    /// Invalid customer data provided
    #[error("Invalid customer data: {0}")]
    InvalidData(String),

    /// Customer validation failed
    #[error("Customer validation failed: {0}")]
    ValidationFailed(String),
}

impl CustomerError {
    /// Creates a CustomerNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        CustomerError::CustomerNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        CustomerError::InvalidData(message.into())
    }

    /// Creates a ValidationFailed error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        CustomerError::ValidationFailed(errors.join("; "))
    }
}
