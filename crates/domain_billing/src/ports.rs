//! Billing Domain Ports
//!
//! This module defines the port interface for the invoice ledger,
//! enabling swappable implementations (PostgreSQL repository, in-memory
//! mock).
//!
//! # Architecture
//!
//! The `InvoicePort` trait defines all operations the billing side
//! needs from invoice storage. Reads that include customer details
//! perform the join at query time; the invoice record itself stores
//! only the customer id.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_billing::ports::InvoicePort;
//! use std::sync::Arc;
//!
//! pub struct PaymentDesk {
//!     invoices: Arc<dyn InvoicePort>,
//! }
//!
//! impl PaymentDesk {
//!     pub async fn settle(&self, id: InvoiceId, details: PaymentDetails) -> Result<Invoice, PortError> {
//!         self.invoices.record_payment(id, details).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, DomainPort, HealthCheckable, InvoiceId, PortError};
use domain_customer::{Customer, PlanType};

use crate::invoice::{Invoice, InvoiceStatus};
use crate::payment::PaymentDetails;

/// Request for issuing a new invoice.
///
/// `customer_id` is taken as given; the ledger never verifies that the
/// customer exists. Status always starts as `Pending`.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    /// Customer being billed
    pub customer_id: CustomerId,
    /// Pre-generated invoice number; must be unique
    pub invoice_number: String,
    /// Amount due
    pub amount: Decimal,
    /// Billing period label
    pub billing_period: String,
    /// Payment due date
    pub due_date: NaiveDate,
    /// Free-text notes
    pub notes: Option<String>,
}

/// The customer fields resolved alongside an invoice on reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub plan_type: PlanType,
    pub monthly_fee: Decimal,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name.clone(),
            email: customer.email.clone(),
            contact_number: customer.contact_number.clone(),
            plan_type: customer.plan_type,
            monthly_fee: customer.monthly_fee,
        }
    }
}

/// An invoice with its customer summary resolved at read time.
///
/// `customer` is `None` when the referenced customer no longer exists;
/// the invoice is still returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceWithCustomer {
    pub invoice: Invoice,
    pub customer: Option<CustomerSummary>,
}

/// The main port trait for the invoice ledger
///
/// All methods are async and return `Result<T, PortError>` for
/// consistent error handling across adapter implementations.
#[async_trait]
pub trait InvoicePort: DomainPort + HealthCheckable {
    /// Issues a new invoice with status `Pending`
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when the invoice number is already taken.
    async fn create_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice, PortError>;

    /// Lists all invoices, newest-created first, with customer
    /// summaries joined in
    async fn list_invoices(&self) -> Result<Vec<InvoiceWithCustomer>, PortError>;

    /// Retrieves one invoice with its customer summary joined in
    ///
    /// # Returns
    ///
    /// The invoice if found, or `PortError::NotFound`
    async fn get_invoice(&self, id: InvoiceId) -> Result<InvoiceWithCustomer, PortError>;

    /// Records a payment, moving the invoice to `Paid`
    ///
    /// Re-recording is allowed and overwrites the previous details.
    async fn record_payment(
        &self,
        id: InvoiceId,
        details: PaymentDetails,
    ) -> Result<Invoice, PortError>;

    /// Hard-deletes an invoice
    ///
    /// # Returns
    ///
    /// The deleted invoice record
    async fn delete_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError>;

    /// Returns the customer ids holding an invoice with the given
    /// status for the given billing period.
    ///
    /// The result may contain duplicates when a customer holds several
    /// matching invoices; callers that need set semantics collect into
    /// one.
    async fn find_billed_customers(
        &self,
        billing_period: &str,
        status: InvoiceStatus,
    ) -> Result<Vec<CustomerId>, PortError>;
}

/// Mock implementation of InvoicePort for testing
///
/// Stores invoices in memory and joins customer summaries from a
/// seeded map, standing in for the database's read-time join.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of InvoicePort
    #[derive(Debug, Default)]
    pub struct MockInvoicePort {
        invoices: Arc<RwLock<HashMap<InvoiceId, Invoice>>>,
        customers: Arc<RwLock<HashMap<CustomerId, CustomerSummary>>>,
    }

    impl MockInvoicePort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with invoices for testing
        pub async fn with_invoices(invoices: Vec<Invoice>) -> Self {
            let port = Self::new();
            for invoice in invoices {
                port.invoices.write().await.insert(invoice.id, invoice);
            }
            port
        }

        /// Seeds the customers available to the read-time join
        pub async fn register_customers(&self, customers: Vec<CustomerSummary>) {
            let mut map = self.customers.write().await;
            for customer in customers {
                map.insert(customer.id, customer);
            }
        }
    }

    impl DomainPort for MockInvoicePort {}

    #[async_trait]
    impl HealthCheckable for MockInvoicePort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-invoice-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl InvoicePort for MockInvoicePort {
        async fn create_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice, PortError> {
            let mut invoices = self.invoices.write().await;

            if invoices
                .values()
                .any(|i| i.invoice_number == new_invoice.invoice_number)
            {
                return Err(PortError::conflict(format!(
                    "Invoice number already exists: {}",
                    new_invoice.invoice_number
                )));
            }

            let mut invoice = Invoice::new(
                new_invoice.customer_id,
                new_invoice.invoice_number,
                new_invoice.amount,
                new_invoice.billing_period,
                new_invoice.due_date,
            );
            invoice.notes = new_invoice.notes;

            invoices.insert(invoice.id, invoice.clone());
            Ok(invoice)
        }

        async fn list_invoices(&self) -> Result<Vec<InvoiceWithCustomer>, PortError> {
            let invoices = self.invoices.read().await;
            let customers = self.customers.read().await;

            let mut results: Vec<_> = invoices.values().cloned().collect();
            results.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            Ok(results
                .into_iter()
                .map(|invoice| {
                    let customer = customers.get(&invoice.customer_id).cloned();
                    InvoiceWithCustomer { invoice, customer }
                })
                .collect())
        }

        async fn get_invoice(&self, id: InvoiceId) -> Result<InvoiceWithCustomer, PortError> {
            let invoice = self
                .invoices
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Invoice", id))?;
            let customer = self.customers.read().await.get(&invoice.customer_id).cloned();

            Ok(InvoiceWithCustomer { invoice, customer })
        }

        async fn record_payment(
            &self,
            id: InvoiceId,
            details: PaymentDetails,
        ) -> Result<Invoice, PortError> {
            let mut invoices = self.invoices.write().await;
            let invoice = invoices
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Invoice", id))?;

            invoice.record_payment(details);
            Ok(invoice.clone())
        }

        async fn delete_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
            self.invoices
                .write()
                .await
                .remove(&id)
                .ok_or_else(|| PortError::not_found("Invoice", id))
        }

        async fn find_billed_customers(
            &self,
            billing_period: &str,
            status: InvoiceStatus,
        ) -> Result<Vec<CustomerId>, PortError> {
            let invoices = self.invoices.read().await;
            Ok(invoices
                .values()
                .filter(|i| i.billing_period == billing_period && i.status == status)
                .map(|i| i.customer_id)
                .collect())
        }
    }
}
