//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! # Architecture
//!
//! Each ported domain has a corresponding adapter that:
//! - Implements the domain's port trait
//! - Translates between domain models and database row types
//! - Uses the repository layer for database operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresInvoiceAdapter;
//! use domain_billing::InvoicePort;
//!
//! let adapter = PostgresInvoiceAdapter::new(pool);
//! let ledger = adapter.list_invoices().await?;
//! ```

pub mod customers;
pub mod invoices;

pub use customers::PostgresCustomerAdapter;
pub use invoices::PostgresInvoiceAdapter;
