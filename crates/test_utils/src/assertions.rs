//! Custom Test Assertions
//!
//! Domain-aware assertion helpers that fail with messages naming the
//! field that drifted rather than a bare left/right dump.

use domain_billing::{Invoice, InvoiceStatus};
use domain_customer::Customer;
use rust_decimal::Decimal;

/// Asserts that a customer's derived fields match the plan catalog
pub fn assert_plan_derivation(customer: &Customer) {
    assert_eq!(
        customer.bandwidth_mbps,
        customer.plan_type.bandwidth_mbps(),
        "Bandwidth drifted from the {} catalog: stored={}, catalog={}",
        customer.plan_type,
        customer.bandwidth_mbps,
        customer.plan_type.bandwidth_mbps()
    );
    assert_eq!(
        customer.monthly_fee,
        customer.plan_type.monthly_fee(),
        "Monthly fee drifted from the {} catalog: stored={}, catalog={}",
        customer.plan_type,
        customer.monthly_fee,
        customer.plan_type.monthly_fee()
    );
}

/// Asserts that an invoice is pending with no payment details
pub fn assert_invoice_pending(invoice: &Invoice) {
    assert_eq!(
        invoice.status,
        InvoiceStatus::Pending,
        "Expected {} to be pending, got {:?}",
        invoice.invoice_number,
        invoice.status
    );
    assert!(
        invoice.payment_date.is_none(),
        "Pending invoice {} carries a payment date",
        invoice.invoice_number
    );
    assert!(
        invoice.payment_method.is_none(),
        "Pending invoice {} carries a payment method",
        invoice.invoice_number
    );
}

/// Asserts that an invoice is paid with full payment details
pub fn assert_invoice_paid(invoice: &Invoice) {
    assert_eq!(
        invoice.status,
        InvoiceStatus::Paid,
        "Expected {} to be paid, got {:?}",
        invoice.invoice_number,
        invoice.status
    );
    assert!(
        invoice.payment_date.is_some(),
        "Paid invoice {} is missing a payment date",
        invoice.invoice_number
    );
    assert!(
        invoice.payment_method.is_some(),
        "Paid invoice {} is missing a payment method",
        invoice.invoice_number
    );
}

/// Asserts that invoices are ordered newest first by creation time
pub fn assert_newest_first(invoices: &[Invoice]) {
    for pair in invoices.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "Invoices out of order: {} ({}) listed before {} ({})",
            pair[0].invoice_number,
            pair[0].created_at,
            pair[1].invoice_number,
            pair[1].created_at
        );
    }
}

/// Asserts that a billing period has the `YYYY-MM` wire shape
pub fn assert_billing_period_format(period: &str) {
    let well_formed = period.len() == 7
        && period.as_bytes()[4] == b'-'
        && period[..4].chars().all(|c| c.is_ascii_digit())
        && period[5..].chars().all(|c| c.is_ascii_digit());
    assert!(well_formed, "Billing period {:?} is not in YYYY-MM form", period);

    let month: u32 = period[5..].parse().expect("numeric month");
    assert!(
        (1..=12).contains(&month),
        "Billing period {:?} has month outside 1..=12",
        period
    );
}

/// Asserts that an invoice number has the `INV-<yyyymm>-<rrrr>` shape
pub fn assert_invoice_number_format(number: &str) {
    let well_formed = number.len() == 15
        && number.starts_with("INV-")
        && number.as_bytes()[10] == b'-'
        && number[4..10].chars().all(|c| c.is_ascii_digit())
        && number[11..].chars().all(|c| c.is_ascii_digit());
    assert!(
        well_formed,
        "Invoice number {:?} is not in INV-<yyyymm>-<rrrr> form",
        number
    );
}

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Decimal {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{TestCustomerBuilder, TestInvoiceBuilder};
    use crate::fixtures::TemporalFixtures;
    use chrono::Duration;
    use domain_billing::{PaymentDetails, PaymentMethod};
    use rust_decimal_macros::dec;

    #[test]
    fn test_plan_derivation_passes_for_fresh_customer() {
        let customer = TestCustomerBuilder::new().build();
        assert_plan_derivation(&customer);
    }

    #[test]
    #[should_panic(expected = "Bandwidth drifted")]
    fn test_plan_derivation_detects_drift() {
        let mut customer = TestCustomerBuilder::new().build();
        customer.bandwidth_mbps = 999;
        assert_plan_derivation(&customer);
    }

    #[test]
    fn test_invoice_state_assertions() {
        let pending = TestInvoiceBuilder::new().build();
        assert_invoice_pending(&pending);

        let paid = TestInvoiceBuilder::new()
            .paid(PaymentDetails::new(PaymentMethod::Cash))
            .build();
        assert_invoice_paid(&paid);
    }

    #[test]
    #[should_panic(expected = "to be paid")]
    fn test_invoice_paid_rejects_pending() {
        let pending = TestInvoiceBuilder::new().build();
        assert_invoice_paid(&pending);
    }

    #[test]
    fn test_newest_first_accepts_descending() {
        let older = TestInvoiceBuilder::new()
            .with_created_at(TemporalFixtures::fixed_instant())
            .build();
        let newer = TestInvoiceBuilder::new()
            .with_created_at(TemporalFixtures::fixed_instant() + Duration::hours(1))
            .build();

        assert_newest_first(&[newer, older]);
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_newest_first_rejects_ascending() {
        let older = TestInvoiceBuilder::new()
            .with_created_at(TemporalFixtures::fixed_instant())
            .build();
        let newer = TestInvoiceBuilder::new()
            .with_created_at(TemporalFixtures::fixed_instant() + Duration::hours(1))
            .build();

        assert_newest_first(&[older, newer]);
    }

    #[test]
    fn test_billing_period_format() {
        assert_billing_period_format("2025-05");
        assert_billing_period_format("2026-12");
    }

    #[test]
    #[should_panic(expected = "not in YYYY-MM form")]
    fn test_billing_period_format_rejects_unpadded() {
        assert_billing_period_format("2025-5");
    }

    #[test]
    fn test_invoice_number_format() {
        assert_invoice_number_format("INV-202505-0042");
    }

    #[test]
    #[should_panic(expected = "not in INV-")]
    fn test_invoice_number_format_rejects_short_period() {
        assert_invoice_number_format("INV-2025-0042");
    }

    #[test]
    fn test_decimal_approx_eq() {
        assert_decimal_approx_eq(dec!(100.001), dec!(100.002), dec!(0.01));
        assert_decimal_in_range(dec!(1100), dec!(800), dec!(1500));
    }
}
