//! Customer repository implementation
//!
//! This module provides database access for customer records. The
//! address is stored flattened into the `customers` table, and the
//! plan-derived columns (`bandwidth_mbps`, `monthly_fee`) are written
//! exactly as the domain entity carries them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use domain_customer::{Customer, CustomerQuery};

use crate::error::DatabaseError;

// ============================================================================
// Row types
// ============================================================================

/// A customer record as stored in the database
///
/// `plan_type` is kept as its stored text form here; conversion back to
/// the domain enum happens in the adapter layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerRow {
    pub id: Uuid,
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub landmark: Option<String>,
    pub contact_number: String,
    pub email: String,
    pub plan_type: String,
    pub bandwidth_mbps: i32,
    pub monthly_fee: Decimal,
    pub subscription_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Repository
// ============================================================================

/// Repository for managing customer data
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a fully-constructed customer entity
    ///
    /// The entity already carries its generated id, derived plan fields,
    /// and timestamps; every column is bound from it verbatim.
    pub async fn insert(&self, customer: &Customer) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id, full_name, street, city, zip_code, landmark,
                contact_number, email, plan_type, bandwidth_mbps,
                monthly_fee, subscription_date, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(Uuid::from(customer.id))
        .bind(&customer.full_name)
        .bind(&customer.service_address.street)
        .bind(&customer.service_address.city)
        .bind(&customer.service_address.zip_code)
        .bind(&customer.service_address.landmark)
        .bind(&customer.contact_number)
        .bind(&customer.email)
        .bind(customer.plan_type.as_str())
        .bind(customer.bandwidth_mbps)
        .bind(customer.monthly_fee)
        .bind(customer.subscription_date)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves a customer by identifier
    ///
    /// # Returns
    ///
    /// The customer record or NotFound error
    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerRow, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id, full_name, street, city, zip_code, landmark,
                contact_number, email, plan_type, bandwidth_mbps,
                monthly_fee, subscription_date, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Customer", id))?;

        Ok(row)
    }

    /// Lists all customers, newest first
    pub async fn list(&self) -> Result<Vec<CustomerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id, full_name, street, city, zip_code, landmark,
                contact_number, email, plan_type, bandwidth_mbps,
                monthly_fee, subscription_date, created_at, updated_at
            FROM customers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds customers matching the query filters, newest first
    ///
    /// NULL filter parameters are no-ops, as are NULL LIMIT/OFFSET, so a
    /// default query returns the full roster.
    pub async fn find(&self, query: &CustomerQuery) -> Result<Vec<CustomerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id, full_name, street, city, zip_code, landmark,
                contact_number, email, plan_type, bandwidth_mbps,
                monthly_fee, subscription_date, created_at, updated_at
            FROM customers
            WHERE ($1::text IS NULL OR email = $1)
              AND ($2::text IS NULL OR plan_type = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&query.email)
        .bind(query.plan_type.map(|p| p.as_str()))
        .bind(query.limit.map(i64::from))
        .bind(query.offset.map(i64::from))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrites an existing customer with the given entity state
    ///
    /// # Returns
    ///
    /// NotFound error if no row matched the entity's id
    pub async fn update(&self, customer: &Customer) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE customers SET
                full_name = $2,
                street = $3,
                city = $4,
                zip_code = $5,
                landmark = $6,
                contact_number = $7,
                email = $8,
                plan_type = $9,
                bandwidth_mbps = $10,
                monthly_fee = $11,
                subscription_date = $12,
                updated_at = $13
            WHERE id = $1
            "#,
        )
        .bind(Uuid::from(customer.id))
        .bind(&customer.full_name)
        .bind(&customer.service_address.street)
        .bind(&customer.service_address.city)
        .bind(&customer.service_address.zip_code)
        .bind(&customer.service_address.landmark)
        .bind(&customer.contact_number)
        .bind(&customer.email)
        .bind(customer.plan_type.as_str())
        .bind(customer.bandwidth_mbps)
        .bind(customer.monthly_fee)
        .bind(customer.subscription_date)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Customer", customer.id));
        }

        Ok(())
    }

    /// Hard-deletes a customer and returns the removed record
    ///
    /// Invoices referencing the customer are left untouched.
    pub async fn delete(&self, id: Uuid) -> Result<CustomerRow, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            DELETE FROM customers
            WHERE id = $1
            RETURNING
                id, full_name, street, city, zip_code, landmark,
                contact_number, email, plan_type, bandwidth_mbps,
                monthly_fee, subscription_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Customer", id))?;

        Ok(row)
    }
}
