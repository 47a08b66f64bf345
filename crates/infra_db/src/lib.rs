//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence layer for the ISP
//! back-office system using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: repositories own the SQL
//! and row types, and port adapters wrap the customer and invoice
//! repositories to implement the domain port traits. User and team
//! repositories are used by the API layer directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations};
//! use infra_db::adapters::PostgresCustomerAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/isp_backoffice")).await?;
//! run_migrations(&pool).await?;
//! let customers = PostgresCustomerAdapter::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repositories;

pub use adapters::{PostgresCustomerAdapter, PostgresInvoiceAdapter};
pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{
    CustomerRepository, InvoiceRepository, NewTeamRecord, NewUserRecord, TeamChanges,
    TeamRepository, UserChanges, UserRepository,
};
