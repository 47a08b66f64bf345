//! Customer Management Domain
//!
//! This crate manages subscriber data for the ISP back-office: customer
//! records, their service addresses, and the fixed plan catalog that
//! determines each customer's bandwidth and monthly fee.
//!
//! # Plan-Derived Fields
//!
//! A customer's `bandwidth_mbps` and `monthly_fee` are never set directly.
//! They are always derived from the plan catalog for the customer's current
//! plan type, and recomputed whenever the plan changes. Stores persist the
//! derived values so that billing reads never need the catalog.
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::customer::{Customer, ServiceAddress};
//! use domain_customer::plan::PlanType;
//! use chrono::NaiveDate;
//!
//! let customer = Customer::new(
//!     "Asha Rao",
//!     ServiceAddress::new("12 MG Road", "Bengaluru", "560001"),
//!     "+91-9800011122",
//!     "asha@example.com",
//!     PlanType::Standard,
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//! );
//!
//! assert_eq!(customer.bandwidth_mbps, 100);
//! assert_eq!(customer.monthly_fee, PlanType::Standard.monthly_fee());
//! ```

pub mod customer;
pub mod plan;
pub mod error;
pub mod validation;
pub mod ports;

pub use customer::{Customer, ServiceAddress};
pub use plan::PlanType;
pub use error::CustomerError;
pub use validation::{CustomerValidator, ValidationResult};
pub use ports::{
    CustomerPort, CustomerQuery,
    CreateCustomerRequest, UpdateCustomerRequest,
};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCustomerPort;
