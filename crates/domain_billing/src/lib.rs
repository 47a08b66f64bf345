//! # Billing Domain - Invoice Ledger and Monthly Generation
//!
//! This crate implements the billing side of the ISP back office: the
//! invoice ledger, payment recording, and the monthly batch generator
//! that issues one invoice per subscribed customer.
//!
//! # Billing Model
//!
//! - An invoice belongs to exactly one customer, referenced by id only.
//!   The reference is weak: it is never validated at write time, and
//!   deleting a customer leaves their invoices in place.
//! - Invoice amounts come from the customer's plan at issuance time; a
//!   later plan change never rewrites existing invoices.
//! - Status moves one way, `Pending` to `Paid`, when a payment is
//!   recorded. `Overdue` exists as a label but nothing assigns it.
//! - Invoice numbers are human-readable (`INV-<period>-<random>`) and
//!   unique; collisions surface at insert time as conflicts, and the
//!   monthly generator treats them as per-customer skips.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::InvoiceGenerator;
//!
//! let generator = InvoiceGenerator::new(customers, invoices);
//! let outcome = generator.generate("2025-05", due_date).await?;
//! println!("created {} skipped {}", outcome.created, outcome.skipped);
//! ```

pub mod error;
pub mod generator;
pub mod invoice;
pub mod number;
pub mod payment;
pub mod ports;

pub use error::BillingError;
pub use generator::{GenerationOutcome, InvoiceGenerator};
pub use invoice::{Invoice, InvoiceStatus};
pub use number::generate_invoice_number;
pub use payment::{PaymentDetails, PaymentMethod};
pub use ports::{CustomerSummary, InvoicePort, InvoiceWithCustomer, NewInvoice};

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockInvoicePort;
