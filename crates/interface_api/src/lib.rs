//! HTTP API Layer
//!
//! This crate provides the REST API for the ISP back office using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(pool, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_billing::{InvoiceGenerator, InvoicePort};
use domain_customer::CustomerPort;
use infra_db::{
    PostgresCustomerAdapter, PostgresInvoiceAdapter, TeamRepository, UserRepository,
};

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, customers, health, invoices, plans, teams, users};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
///
/// Customer and invoice access go through ports so tests can swap in
/// mocks; user and team access talk to their repositories directly.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
    pub customers: Arc<dyn CustomerPort>,
    pub invoices: Arc<dyn InvoicePort>,
    pub generator: Arc<InvoiceGenerator>,
    pub users: UserRepository,
    pub teams: TeamRepository,
}

impl AppState {
    /// Creates state backed by PostgreSQL adapters
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        let customers: Arc<dyn CustomerPort> =
            Arc::new(PostgresCustomerAdapter::new(pool.clone()));
        let invoices: Arc<dyn InvoicePort> = Arc::new(PostgresInvoiceAdapter::new(pool.clone()));

        Self::with_ports(pool, config, customers, invoices)
    }

    /// Creates state with caller-supplied port implementations
    pub fn with_ports(
        pool: PgPool,
        config: ApiConfig,
        customers: Arc<dyn CustomerPort>,
        invoices: Arc<dyn InvoicePort>,
    ) -> Self {
        let generator = Arc::new(InvoiceGenerator::new(customers.clone(), invoices.clone()));

        Self {
            users: UserRepository::new(pool.clone()),
            teams: TeamRepository::new(pool.clone()),
            pool,
            config,
            customers,
            invoices,
            generator,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/v1/auth/login", post(auth_handlers::login));

    // Customer routes
    let customer_routes = Router::new()
        .route("/", post(customers::create_customer))
        .route("/", get(customers::list_customers))
        .route("/:id", get(customers::get_customer))
        .route("/:id", put(customers::update_customer))
        .route("/:id", delete(customers::delete_customer));

    // Invoice routes
    let invoice_routes = Router::new()
        .route("/generate-monthly", post(invoices::generate_monthly))
        .route("/", post(invoices::create_invoice))
        .route("/", get(invoices::list_invoices))
        .route("/:id", get(invoices::get_invoice))
        .route("/:id/payment", put(invoices::record_payment))
        .route("/:id", delete(invoices::delete_invoice));

    // Team routes
    let team_routes = Router::new()
        .route("/", post(teams::create_team))
        .route("/", get(teams::list_teams))
        .route("/:id", get(teams::get_team))
        .route("/:id", put(teams::update_team))
        .route("/:id", delete(teams::delete_team));

    // User routes
    let user_routes = Router::new()
        .route("/", post(users::create_user))
        .route("/", get(users::list_users))
        .route("/:id", get(users::get_user))
        .route("/:id", put(users::update_user))
        .route("/:id", delete(users::delete_user));

    // Protected API routes
    let api_routes = Router::new()
        .route("/auth/me", get(auth_handlers::me))
        .route("/plans", get(plans::list_plans))
        .nest("/customers", customer_routes)
        .nest("/invoices", invoice_routes)
        .nest("/teams", team_routes)
        .nest("/users", user_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
