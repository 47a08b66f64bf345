//! PostgreSQL Invoice Adapter
//!
//! This module provides the database adapter for the invoice ledger,
//! implementing the `InvoicePort` trait using PostgreSQL via the
//! `InvoiceRepository`.
//!
//! # Overview
//!
//! The `PostgresInvoiceAdapter` bridges the billing domain's port
//! interface and the database layer. It:
//!
//! - Builds domain invoices for writes so every ledger entry starts in
//!   Pending with its generated id and timestamps
//! - Converts joined listing rows into invoice-with-customer views
//! - Handles error translation between database and port errors
//!
//! The unique index on `invoice_number` is what turns a duplicate
//! number into a conflict here; the adapter never pre-checks.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::str::FromStr;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, CustomerId, DomainPort, HealthCheckResult, HealthCheckable, InvoiceId,
    PortError,
};
use domain_billing::{
    CustomerSummary, Invoice, InvoicePort, InvoiceStatus, InvoiceWithCustomer, NewInvoice,
    PaymentDetails, PaymentMethod,
};
use domain_customer::PlanType;

use crate::adapters::customers::db_to_port_error;
use crate::error::DatabaseError;
use crate::repositories::invoices::{InvoiceRepository, InvoiceRow, InvoiceWithCustomerRow};

/// PostgreSQL-backed implementation of the InvoicePort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants. A duplicate
/// invoice number maps to `PortError::Conflict` with the offending
/// number in the message; call sites that can miss map
/// `DatabaseError::NotFound` themselves.
#[derive(Debug, Clone)]
pub struct PostgresInvoiceAdapter {
    repository: InvoiceRepository,
    pool: PgPool,
}

impl PostgresInvoiceAdapter {
    /// Creates a new PostgreSQL invoice adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InvoiceRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &InvoiceRepository {
        &self.repository
    }
}

impl DomainPort for PostgresInvoiceAdapter {}

#[async_trait]
impl HealthCheckable for PostgresInvoiceAdapter {
    /// Checks database connectivity
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: "postgres-invoice-adapter".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: "postgres-invoice-adapter".to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl InvoicePort for PostgresInvoiceAdapter {
    #[instrument(skip(self, new_invoice), fields(invoice_number = %new_invoice.invoice_number))]
    async fn create_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice, PortError> {
        debug!("Creating invoice");

        let mut invoice = Invoice::new(
            new_invoice.customer_id,
            new_invoice.invoice_number,
            new_invoice.amount,
            new_invoice.billing_period,
            new_invoice.due_date,
        );
        if let Some(notes) = new_invoice.notes {
            invoice = invoice.with_notes(notes);
        }

        self.repository.insert(&invoice).await.map_err(|e| {
            if e.is_duplicate() {
                PortError::conflict(format!(
                    "Invoice number already exists: {}",
                    invoice.invoice_number
                ))
            } else {
                db_to_port_error(e)
            }
        })?;

        Ok(invoice)
    }

    #[instrument(skip(self))]
    async fn list_invoices(&self) -> Result<Vec<InvoiceWithCustomer>, PortError> {
        debug!("Listing invoices with customer summaries");

        let rows = self
            .repository
            .list_with_customers()
            .await
            .map_err(db_to_port_error)?;

        rows.into_iter().map(row_to_invoice_with_customer).collect()
    }

    #[instrument(skip(self), fields(invoice_id = %id))]
    async fn get_invoice(&self, id: InvoiceId) -> Result<InvoiceWithCustomer, PortError> {
        debug!("Fetching invoice by ID");

        let row = self
            .repository
            .get_by_id(id.into())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Invoice", id),
                other => db_to_port_error(other),
            })?;

        row_to_invoice_with_customer(row)
    }

    #[instrument(skip(self, details), fields(invoice_id = %id))]
    async fn record_payment(
        &self,
        id: InvoiceId,
        details: PaymentDetails,
    ) -> Result<Invoice, PortError> {
        debug!("Recording payment via {:?}", details.payment_method);

        let payment_date = details
            .payment_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let row = self
            .repository
            .record_payment(
                id.into(),
                payment_date,
                details.payment_method.as_str(),
                details.notes.as_deref(),
            )
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Invoice", id),
                other => db_to_port_error(other),
            })?;

        row_to_invoice(row)
    }

    #[instrument(skip(self), fields(invoice_id = %id))]
    async fn delete_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        debug!("Deleting invoice");

        let row = self.repository.delete(id.into()).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => PortError::not_found("Invoice", id),
            other => db_to_port_error(other),
        })?;

        row_to_invoice(row)
    }

    #[instrument(skip(self))]
    async fn find_billed_customers(
        &self,
        billing_period: &str,
        status: InvoiceStatus,
    ) -> Result<Vec<CustomerId>, PortError> {
        debug!("Finding customers billed in {} as {}", billing_period, status);

        let ids = self
            .repository
            .find_billed_customer_ids(billing_period, status.as_str())
            .await
            .map_err(db_to_port_error)?;

        Ok(ids.into_iter().map(CustomerId::from).collect())
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

/// Converts a database invoice row to a domain Invoice
fn row_to_invoice(row: InvoiceRow) -> Result<Invoice, PortError> {
    let status =
        InvoiceStatus::from_str(&row.status).map_err(|e| PortError::internal(e.to_string()))?;
    let payment_method = row
        .payment_method
        .as_deref()
        .map(PaymentMethod::from_str)
        .transpose()
        .map_err(|e| PortError::internal(e.to_string()))?;

    Ok(Invoice {
        id: InvoiceId::from(row.id),
        customer_id: CustomerId::from(row.customer_id),
        invoice_number: row.invoice_number,
        amount: row.amount,
        billing_period: row.billing_period,
        due_date: row.due_date,
        status,
        payment_date: row.payment_date,
        payment_method,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

/// Converts a joined listing row to an invoice-with-customer view
///
/// The customer summary is present exactly when the LEFT JOIN matched;
/// the summary columns are all NOT NULL on customers, so they are
/// either all present or all absent.
fn row_to_invoice_with_customer(
    row: InvoiceWithCustomerRow,
) -> Result<InvoiceWithCustomer, PortError> {
    let customer = match (
        row.customer_full_name,
        row.customer_email,
        row.customer_contact_number,
        row.customer_plan_type,
        row.customer_monthly_fee,
    ) {
        (Some(full_name), Some(email), Some(contact_number), Some(plan_type), Some(monthly_fee)) => {
            Some(CustomerSummary {
                id: CustomerId::from(row.customer_id),
                full_name,
                email,
                contact_number,
                plan_type: PlanType::from_str(&plan_type)
                    .map_err(|e| PortError::internal(e.to_string()))?,
                monthly_fee,
            })
        }
        _ => None,
    };

    let invoice = row_to_invoice(InvoiceRow {
        id: row.id,
        customer_id: row.customer_id,
        invoice_number: row.invoice_number,
        amount: row.amount,
        billing_period: row.billing_period,
        due_date: row.due_date,
        status: row.status,
        payment_date: row.payment_date,
        payment_method: row.payment_method,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })?;

    Ok(InvoiceWithCustomer { invoice, customer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_join_row() -> InvoiceWithCustomerRow {
        InvoiceWithCustomerRow {
            id: Uuid::now_v7(),
            customer_id: Uuid::now_v7(),
            invoice_number: "INV-202505-0042".to_string(),
            amount: dec!(1100),
            billing_period: "2025-05".to_string(),
            due_date: chrono::NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
            status: "Pending".to_string(),
            payment_date: None,
            payment_method: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            customer_full_name: Some("Asha Rao".to_string()),
            customer_email: Some("asha@example.com".to_string()),
            customer_contact_number: Some("+91-9800011122".to_string()),
            customer_plan_type: Some("Standard".to_string()),
            customer_monthly_fee: Some(dec!(1100)),
        }
    }

    #[test]
    fn test_join_row_with_customer() {
        let entry = row_to_invoice_with_customer(sample_join_row()).unwrap();

        let customer = entry.customer.expect("summary should be present");
        assert_eq!(customer.full_name, "Asha Rao");
        assert_eq!(customer.plan_type, PlanType::Standard);
        assert_eq!(entry.invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_join_row_for_deleted_customer() {
        let mut row = sample_join_row();
        row.customer_full_name = None;
        row.customer_email = None;
        row.customer_contact_number = None;
        row.customer_plan_type = None;
        row.customer_monthly_fee = None;

        let entry = row_to_invoice_with_customer(row).unwrap();

        assert!(entry.customer.is_none());
        assert_eq!(entry.invoice.invoice_number, "INV-202505-0042");
    }

    #[test]
    fn test_row_with_payment_fields() {
        let row = InvoiceRow {
            id: Uuid::now_v7(),
            customer_id: Uuid::now_v7(),
            invoice_number: "INV-202505-0099".to_string(),
            amount: dec!(800),
            billing_period: "2025-05".to_string(),
            due_date: chrono::NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
            status: "Paid".to_string(),
            payment_date: chrono::NaiveDate::from_ymd_opt(2025, 5, 10),
            payment_method: Some("Upi".to_string()),
            notes: Some("Paid at branch".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let invoice = row_to_invoice(row).unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.payment_method, Some(PaymentMethod::Upi));
    }

    #[test]
    fn test_row_with_unknown_status() {
        let row = InvoiceRow {
            id: Uuid::now_v7(),
            customer_id: Uuid::now_v7(),
            invoice_number: "INV-202505-0001".to_string(),
            amount: dec!(800),
            billing_period: "2025-05".to_string(),
            due_date: chrono::NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
            status: "Cancelled".to_string(),
            payment_date: None,
            payment_method: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let result = row_to_invoice(row);
        assert!(result.is_err());
    }
}
