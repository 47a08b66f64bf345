//! Request and response DTOs
//!
//! Request bodies deserialize every field as optional; handlers check
//! presence so that a missing field becomes a 400 with a useful
//! message rather than a deserialization rejection.

pub mod auth;
pub mod customers;
pub mod invoices;
pub mod teams;
pub mod users;
