//! Invoice repository implementation
//!
//! This module provides database access for the invoice ledger. Listing
//! joins customer details in a single query; because invoices carry no
//! foreign key to customers, the join is a LEFT JOIN and the customer
//! columns come back NULL for invoices whose customer has been deleted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use domain_billing::Invoice;

use crate::error::DatabaseError;

// ============================================================================
// Row types
// ============================================================================

/// An invoice record as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub amount: Decimal,
    pub billing_period: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An invoice row joined with its customer's summary columns
///
/// All `customer_*` columns are nullable: a deleted customer leaves the
/// invoice behind with no matching row to join.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceWithCustomerRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub amount: Decimal,
    pub billing_period: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub customer_full_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_contact_number: Option<String>,
    pub customer_plan_type: Option<String>,
    pub customer_monthly_fee: Option<Decimal>,
}

// ============================================================================
// Repository
// ============================================================================

/// Repository for managing the invoice ledger
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a fully-constructed invoice entity
    ///
    /// The unique index on `invoice_number` surfaces a duplicate as
    /// [`DatabaseError::DuplicateEntry`]. The customer id is stored
    /// without validation.
    pub async fn insert(&self, invoice: &Invoice) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (
                id, customer_id, invoice_number, amount, billing_period,
                due_date, status, payment_date, payment_method, notes,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(Uuid::from(invoice.id))
        .bind(Uuid::from(invoice.customer_id))
        .bind(&invoice.invoice_number)
        .bind(invoice.amount)
        .bind(&invoice.billing_period)
        .bind(invoice.due_date)
        .bind(invoice.status.as_str())
        .bind(invoice.payment_date)
        .bind(invoice.payment_method.map(|m| m.as_str()))
        .bind(&invoice.notes)
        .bind(invoice.created_at)
        .bind(invoice.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves an invoice by identifier, customer summary joined in
    pub async fn get_by_id(&self, id: Uuid) -> Result<InvoiceWithCustomerRow, DatabaseError> {
        let row = sqlx::query_as::<_, InvoiceWithCustomerRow>(
            r#"
            SELECT
                i.id, i.customer_id, i.invoice_number, i.amount, i.billing_period,
                i.due_date, i.status, i.payment_date, i.payment_method, i.notes,
                i.created_at, i.updated_at,
                c.full_name AS customer_full_name,
                c.email AS customer_email,
                c.contact_number AS customer_contact_number,
                c.plan_type AS customer_plan_type,
                c.monthly_fee AS customer_monthly_fee
            FROM invoices i
            LEFT JOIN customers c ON c.id = i.customer_id
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Invoice", id))?;

        Ok(row)
    }

    /// Lists all invoices joined with customer summaries, newest first
    pub async fn list_with_customers(&self) -> Result<Vec<InvoiceWithCustomerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InvoiceWithCustomerRow>(
            r#"
            SELECT
                i.id, i.customer_id, i.invoice_number, i.amount, i.billing_period,
                i.due_date, i.status, i.payment_date, i.payment_method, i.notes,
                i.created_at, i.updated_at,
                c.full_name AS customer_full_name,
                c.email AS customer_email,
                c.contact_number AS customer_contact_number,
                c.plan_type AS customer_plan_type,
                c.monthly_fee AS customer_monthly_fee
            FROM invoices i
            LEFT JOIN customers c ON c.id = i.customer_id
            ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Marks an invoice as paid and returns the updated record
    ///
    /// Omitted notes leave the stored notes untouched; provided notes
    /// overwrite them. The status moves to Paid regardless of its
    /// previous value, so repeated payments simply overwrite the
    /// payment details.
    pub async fn record_payment(
        &self,
        id: Uuid,
        payment_date: NaiveDate,
        payment_method: &str,
        notes: Option<&str>,
    ) -> Result<InvoiceRow, DatabaseError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            UPDATE invoices SET
                status = 'Paid',
                payment_date = $2,
                payment_method = $3,
                notes = COALESCE($4, notes),
                updated_at = now()
            WHERE id = $1
            RETURNING
                id, customer_id, invoice_number, amount, billing_period,
                due_date, status, payment_date, payment_method, notes,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payment_date)
        .bind(payment_method)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Invoice", id))?;

        Ok(row)
    }

    /// Hard-deletes an invoice and returns the removed record
    pub async fn delete(&self, id: Uuid) -> Result<InvoiceRow, DatabaseError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            DELETE FROM invoices
            WHERE id = $1
            RETURNING
                id, customer_id, invoice_number, amount, billing_period,
                due_date, status, payment_date, payment_method, notes,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Invoice", id))?;

        Ok(row)
    }

    /// Returns the customer ids billed in a period with the given status
    ///
    /// The result is not deduplicated; a customer invoiced twice in the
    /// period appears twice.
    pub async fn find_billed_customer_ids(
        &self,
        billing_period: &str,
        status: &str,
    ) -> Result<Vec<Uuid>, DatabaseError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT customer_id
            FROM invoices
            WHERE billing_period = $1 AND status = $2
            "#,
        )
        .bind(billing_period)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}
