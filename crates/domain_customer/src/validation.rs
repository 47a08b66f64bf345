//! Customer validation rules
//!
//! # Validation Rules
//!
//! - Full name, contact number, street, city, and zip code must be non-empty
//! - Email must look like an email address
//! - Derived fields must match the plan catalog (fatal drift check)
//! - A subscription date in the future is flagged as a warning, not an error

use chrono::Utc;

use crate::customer::{Customer, ServiceAddress};
use crate::ports::CreateCustomerRequest;

/// Result of customer validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the customer is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for customer records and creation requests
///
/// # Examples
///
/// ```rust,ignore
/// let result = CustomerValidator::validate(&customer);
/// if !result.is_valid {
///     for error in result.errors {
///         println!("Validation error: {}", error);
///     }
/// }
/// ```
pub struct CustomerValidator;

impl CustomerValidator {
    /// Validates a customer record
    ///
    /// # Arguments
    ///
    /// * `customer` - The customer to validate
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate(customer: &Customer) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_fields(
            &customer.full_name,
            &customer.service_address,
            &customer.contact_number,
            &customer.email,
            &mut result,
        );

        // Derived fields must match the catalog for the current plan
        if !customer.derived_fields_consistent() {
            result.add_error(format!(
                "Derived fields do not match plan {}: {} Mbps / {}",
                customer.plan_type, customer.bandwidth_mbps, customer.monthly_fee
            ));
        }

        let today = Utc::now().date_naive();
        if customer.subscription_date > today {
            result.add_warning("Subscription date is in the future");
        }

        result
    }

    /// Validates a customer creation request before it reaches a store
    ///
    /// # Arguments
    ///
    /// * `request` - The creation request to validate
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate_request(request: &CreateCustomerRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_fields(
            &request.full_name,
            &request.service_address,
            &request.contact_number,
            &request.email,
            &mut result,
        );

        if let Some(date) = request.subscription_date {
            let today = Utc::now().date_naive();
            if date > today {
                result.add_warning("Subscription date is in the future");
            }
        }

        result
    }

    /// Validates the fields shared by records and requests
    fn validate_fields(
        full_name: &str,
        address: &ServiceAddress,
        contact_number: &str,
        email: &str,
        result: &mut ValidationResult,
    ) {
        if full_name.trim().is_empty() {
            result.add_error("Customer full name is required");
        }

        // Email format validation (basic)
        if !email.contains('@') || !email.contains('.') {
            result.add_error(format!("Invalid email format: {}", email));
        }

        if contact_number.trim().is_empty() {
            result.add_error("Contact number is required");
        }

        if address.street.trim().is_empty() {
            result.add_error("Street is required");
        }
        if address.city.trim().is_empty() {
            result.add_error("City is required");
        }
        if address.zip_code.trim().is_empty() {
            result.add_error("Zip code is required");
        }
    }
}
