//! HTTP request handlers

use chrono::NaiveDate;

use crate::error::ApiError;

pub mod auth;
pub mod customers;
pub mod health;
pub mod invoices;
pub mod plans;
pub mod teams;
pub mod users;

/// Unwraps a required request field or rejects with a 400
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("Missing required field: {}", field)))
}

/// Parses an ISO date string or rejects with a 400
pub(crate) fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("Invalid date for {}: expected YYYY-MM-DD", field)))
}
