//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each aggregate. Repositories encapsulate SQL
//! queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Customer and invoice repositories return row types; their port
//! adapters own the row-to-domain conversion. The user and team
//! repositories have no port in front of them and hand out domain
//! entities directly.

pub mod customers;
pub mod invoices;
pub mod teams;
pub mod users;

pub use customers::{CustomerRepository, CustomerRow};
pub use invoices::{InvoiceRepository, InvoiceRow, InvoiceWithCustomerRow};
pub use teams::{NewTeamRecord, TeamChanges, TeamRepository, TeamRow};
pub use users::{NewUserRecord, UserChanges, UserRepository, UserRow};
