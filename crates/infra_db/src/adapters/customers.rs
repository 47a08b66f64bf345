//! PostgreSQL Customer Adapter
//!
//! This module provides the database adapter for the customer directory,
//! implementing the `CustomerPort` trait using PostgreSQL via the
//! `CustomerRepository`.
//!
//! # Overview
//!
//! The `PostgresCustomerAdapter` bridges the domain layer's port
//! interface and the database layer. It:
//!
//! - Translates port requests into repository operations
//! - Builds domain entities for writes so the plan-derived fields are
//!   computed before anything touches the database
//! - Converts database rows back to domain models on reads
//! - Handles error translation between database and port errors
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresCustomerAdapter;
//! use domain_customer::CustomerPort;
//! use std::sync::Arc;
//!
//! let adapter = PostgresCustomerAdapter::new(pool);
//!
//! let port: Arc<dyn CustomerPort> = Arc::new(adapter);
//! let roster = port.list_customers().await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::str::FromStr;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, CustomerId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_customer::{
    CreateCustomerRequest, Customer, CustomerPort, CustomerQuery, PlanType, ServiceAddress,
    UpdateCustomerRequest,
};

use crate::error::DatabaseError;
use crate::repositories::customers::{CustomerRepository, CustomerRow};

/// PostgreSQL-backed implementation of the CustomerPort trait
///
/// # Health Checking
///
/// The adapter implements `HealthCheckable` to verify database
/// connectivity with a simple query against the connection pool.
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants. Call sites
/// that can miss map `DatabaseError::NotFound` themselves, with the
/// entity id still in scope.
#[derive(Debug, Clone)]
pub struct PostgresCustomerAdapter {
    repository: CustomerRepository,
    pool: PgPool,
}

impl PostgresCustomerAdapter {
    /// Creates a new PostgreSQL customer adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &CustomerRepository {
        &self.repository
    }
}

impl DomainPort for PostgresCustomerAdapter {}

#[async_trait]
impl HealthCheckable for PostgresCustomerAdapter {
    /// Checks database connectivity
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: "postgres-customer-adapter".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: "postgres-customer-adapter".to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl CustomerPort for PostgresCustomerAdapter {
    #[instrument(skip(self), fields(customer_id = %id))]
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, PortError> {
        debug!("Fetching customer by ID");

        let row = self
            .repository
            .get_by_id(id.into())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Customer", id),
                other => db_to_port_error(other),
            })?;

        row_to_customer(row)
    }

    #[instrument(skip(self))]
    async fn list_customers(&self) -> Result<Vec<Customer>, PortError> {
        debug!("Listing customer roster");

        let rows = self.repository.list().await.map_err(db_to_port_error)?;

        rows.into_iter().map(row_to_customer).collect()
    }

    #[instrument(skip(self))]
    async fn find_customers(&self, query: CustomerQuery) -> Result<Vec<Customer>, PortError> {
        debug!("Finding customers with query: {:?}", query);

        let rows = self
            .repository
            .find(&query)
            .await
            .map_err(db_to_port_error)?;

        rows.into_iter().map(row_to_customer).collect()
    }

    #[instrument(skip(self, request))]
    async fn create_customer(&self, request: CreateCustomerRequest) -> Result<Customer, PortError> {
        debug!("Creating customer on plan {:?}", request.plan_type);

        let subscription_date = request
            .subscription_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let customer = Customer::new(
            request.full_name,
            request.service_address,
            request.contact_number,
            request.email,
            request.plan_type,
            subscription_date,
        );

        self.repository
            .insert(&customer)
            .await
            .map_err(db_to_port_error)?;

        Ok(customer)
    }

    #[instrument(skip(self, request), fields(customer_id = %id))]
    async fn update_customer(
        &self,
        id: CustomerId,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, PortError> {
        debug!("Updating customer");

        let row = self
            .repository
            .get_by_id(id.into())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Customer", id),
                other => db_to_port_error(other),
            })?;
        let mut customer = row_to_customer(row)?;

        if let Some(full_name) = request.full_name {
            customer.full_name = full_name;
        }
        if let Some(service_address) = request.service_address {
            customer.service_address = service_address;
        }
        if let Some(contact_number) = request.contact_number {
            customer.contact_number = contact_number;
        }
        if let Some(email) = request.email {
            customer.email = email;
        }
        if let Some(subscription_date) = request.subscription_date {
            customer.subscription_date = subscription_date;
        }
        if let Some(plan_type) = request.plan_type {
            customer.change_plan(plan_type);
        }
        customer.updated_at = Utc::now();

        self.repository
            .update(&customer)
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Customer", id),
                other => db_to_port_error(other),
            })?;

        Ok(customer)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn delete_customer(&self, id: CustomerId) -> Result<Customer, PortError> {
        debug!("Deleting customer");

        let row = self.repository.delete(id.into()).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => PortError::not_found("Customer", id),
            other => db_to_port_error(other),
        })?;

        row_to_customer(row)
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

/// Converts a database error to a port error
pub(crate) fn db_to_port_error(error: DatabaseError) -> PortError {
    match error {
        DatabaseError::DuplicateEntry(message) => PortError::conflict(message),
        DatabaseError::ConnectionFailed(message) => PortError::connection(message),
        DatabaseError::PoolExhausted => PortError::connection("Connection pool exhausted"),
        other => PortError::internal(other.to_string()),
    }
}

/// Converts a database customer row to a domain Customer
///
/// The stored derived columns are carried over as-is; they record what
/// the catalog said when the row was last written.
fn row_to_customer(row: CustomerRow) -> Result<Customer, PortError> {
    let plan_type =
        PlanType::from_str(&row.plan_type).map_err(|e| PortError::internal(e.to_string()))?;

    Ok(Customer {
        id: CustomerId::from(row.id),
        full_name: row.full_name,
        service_address: ServiceAddress {
            street: row.street,
            city: row.city,
            zip_code: row.zip_code,
            landmark: row.landmark,
        },
        contact_number: row.contact_number,
        email: row.email,
        plan_type,
        bandwidth_mbps: row.bandwidth_mbps,
        monthly_fee: row.monthly_fee,
        subscription_date: row.subscription_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
