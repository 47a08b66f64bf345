//! Customer Domain Ports
//!
//! This module defines the port interface for the customer directory,
//! enabling swappable implementations (PostgreSQL repository, in-memory
//! mock).
//!
//! # Architecture
//!
//! The `CustomerPort` trait defines all operations that consumers of the
//! customer directory need. Two adapters implement it:
//!
//! - **Internal Adapter**: Uses the PostgreSQL database (infra_db)
//! - **Mock Adapter**: In-memory store for testing without a database
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_customer::ports::CustomerPort;
//! use std::sync::Arc;
//!
//! // Services receive the port trait, never a concrete store
//! pub struct BillingRun {
//!     customers: Arc<dyn CustomerPort>,
//! }
//!
//! impl BillingRun {
//!     pub async fn roster(&self) -> Result<Vec<Customer>, PortError> {
//!         self.customers.list_customers().await
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{CustomerId, DomainPort, HealthCheckable, PortError};

use crate::customer::{Customer, ServiceAddress};
use crate::plan::PlanType;

/// Query parameters for finding customers
#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    /// Filter by email address
    pub email: Option<String>,
    /// Filter by plan type
    pub plan_type: Option<PlanType>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl CustomerQuery {
    /// Creates a query to find by email
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by plan type
    pub fn by_plan(plan_type: PlanType) -> Self {
        Self {
            plan_type: Some(plan_type),
            ..Default::default()
        }
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// Request for registering a new customer
///
/// The store derives `bandwidth_mbps` and `monthly_fee` from `plan_type`
/// when it persists the record; callers never supply them.
#[derive(Debug, Clone)]
pub struct CreateCustomerRequest {
    /// Full legal name
    pub full_name: String,
    /// Where service is delivered
    pub service_address: ServiceAddress,
    /// Primary phone number
    pub contact_number: String,
    /// Primary email address
    pub email: String,
    /// Subscription plan
    pub plan_type: PlanType,
    /// Subscription start date (defaults to today when omitted)
    pub subscription_date: Option<NaiveDate>,
}

/// Request for updating an existing customer
///
/// A plan change recomputes the derived fields in the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerRequest {
    /// New full name
    pub full_name: Option<String>,
    /// New service address
    pub service_address: Option<ServiceAddress>,
    /// New contact number
    pub contact_number: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New plan type
    pub plan_type: Option<PlanType>,
    /// New subscription start date
    pub subscription_date: Option<NaiveDate>,
}

/// The main port trait for the customer directory
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations.
#[async_trait]
pub trait CustomerPort: DomainPort + HealthCheckable {
    /// Retrieves a customer by ID
    ///
    /// # Returns
    ///
    /// The customer if found, or `PortError::NotFound`
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, PortError>;

    /// Lists the full customer roster, newest first
    async fn list_customers(&self) -> Result<Vec<Customer>, PortError>;

    /// Finds customers matching the query criteria
    async fn find_customers(&self, query: CustomerQuery) -> Result<Vec<Customer>, PortError>;

    /// Registers a new customer, deriving plan fields in the store
    ///
    /// # Returns
    ///
    /// The created customer with generated ID and derived fields
    async fn create_customer(&self, request: CreateCustomerRequest) -> Result<Customer, PortError>;

    /// Updates an existing customer; a plan change recomputes derived fields
    ///
    /// # Returns
    ///
    /// The updated customer
    async fn update_customer(
        &self,
        id: CustomerId,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, PortError>;

    /// Hard-deletes a customer
    ///
    /// Invoices referencing the customer are left untouched.
    ///
    /// # Returns
    ///
    /// The deleted customer record
    async fn delete_customer(&self, id: CustomerId) -> Result<Customer, PortError>;
}

/// Mock implementation of CustomerPort for testing
///
/// This adapter stores customers in memory and is useful for unit testing
/// without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of CustomerPort
    #[derive(Debug, Default)]
    pub struct MockCustomerPort {
        customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    }

    impl MockCustomerPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with customers for testing
        pub async fn with_customers(customers: Vec<Customer>) -> Self {
            let port = Self::new();
            for customer in customers {
                port.customers.write().await.insert(customer.id, customer);
            }
            port
        }
    }

    impl DomainPort for MockCustomerPort {}

    #[async_trait]
    impl HealthCheckable for MockCustomerPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-customer-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl CustomerPort for MockCustomerPort {
        async fn get_customer(&self, id: CustomerId) -> Result<Customer, PortError> {
            self.customers
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Customer", id))
        }

        async fn list_customers(&self) -> Result<Vec<Customer>, PortError> {
            let customers = self.customers.read().await;
            let mut results: Vec<_> = customers.values().cloned().collect();
            results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(results)
        }

        async fn find_customers(&self, query: CustomerQuery) -> Result<Vec<Customer>, PortError> {
            let customers = self.customers.read().await;
            let mut results: Vec<_> = customers
                .values()
                .filter(|c| {
                    if let Some(ref email) = query.email {
                        if &c.email != email {
                            return false;
                        }
                    }
                    if let Some(plan_type) = query.plan_type {
                        if c.plan_type != plan_type {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect();
            results.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            // Apply pagination
            if let Some(offset) = query.offset {
                results = results.into_iter().skip(offset as usize).collect();
            }
            if let Some(limit) = query.limit {
                results = results.into_iter().take(limit as usize).collect();
            }

            Ok(results)
        }

        async fn create_customer(
            &self,
            request: CreateCustomerRequest,
        ) -> Result<Customer, PortError> {
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

            self.customers
                .write()
                .await
                .insert(customer.id, customer.clone());
            Ok(customer)
        }

        async fn update_customer(
            &self,
            id: CustomerId,
            request: UpdateCustomerRequest,
        ) -> Result<Customer, PortError> {
            let mut customers = self.customers.write().await;
            let customer = customers
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Customer", id))?;

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

            Ok(customer.clone())
        }

        async fn delete_customer(&self, id: CustomerId) -> Result<Customer, PortError> {
            self.customers
                .write()
                .await
                .remove(&id)
                .ok_or_else(|| PortError::not_found("Customer", id))
        }
    }
}
