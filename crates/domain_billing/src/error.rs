//! Billing domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// The customer roster is empty, so there is nothing to bill
    #[error("No customers found to generate invoices for")]
    NoCustomers,

    /// An invoice status string did not match the fixed enumeration
    #[error("Unknown invoice status: {0}")]
    UnknownStatus(String),

    /// A payment method string did not match the fixed enumeration
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// A store operation failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl BillingError {
    /// Returns true if the error should be reported to the caller as
    /// their mistake rather than a system failure
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BillingError::Port(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BillingError::NoCustomers.to_string(),
            "No customers found to generate invoices for"
        );
        assert_eq!(
            BillingError::UnknownPaymentMethod("Cheque".to_string()).to_string(),
            "Unknown payment method: Cheque"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(BillingError::NoCustomers.is_client_error());
        assert!(!BillingError::Port(PortError::connection("down")).is_client_error());
    }
}
