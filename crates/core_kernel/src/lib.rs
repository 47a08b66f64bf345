//! Core Kernel - Foundational types and utilities for the ISP back-office
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for domain entities
//! - The shared port error taxonomy for adapters
//! - Health check primitives for infrastructure adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{CustomerId, InvoiceId, TeamId, UserId};
pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
