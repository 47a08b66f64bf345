//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random domain values
//! that maintain their invariants.

use chrono::{DateTime, Days, Duration, NaiveDate, TimeZone, Utc};
use core_kernel::{CustomerId, InvoiceId};
use domain_billing::number::invoice_number_for;
use domain_billing::PaymentMethod;
use domain_customer::PlanType;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating plan types
pub fn plan_type_strategy() -> impl Strategy<Value = PlanType> {
    prop_oneof![
        Just(PlanType::Basic),
        Just(PlanType::Standard),
        Just(PlanType::Premium),
    ]
}

/// Strategy for generating payment methods
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::BankTransfer),
        Just(PaymentMethod::Upi),
    ]
}

/// Strategy for generating billing periods in `YYYY-MM` form
pub fn billing_period_strategy() -> impl Strategy<Value = String> {
    (2020i32..2031i32, 1u32..13u32).prop_map(|(year, month)| format!("{:04}-{:02}", year, month))
}

/// Strategy for generating positive invoice amounts with at most two
/// decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for generating catalog fees
pub fn plan_fee_strategy() -> impl Strategy<Value = Decimal> {
    plan_type_strategy().prop_map(|plan| plan.monthly_fee())
}

/// Strategy for generating invoice numbers in `INV-<yyyymm>-<rrrr>` form
pub fn invoice_number_strategy() -> impl Strategy<Value = String> {
    (2020i32..2031i32, 1u32..13u32, 0u16..10000u16).prop_map(|(year, month, suffix)| {
        let date = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
        invoice_number_for(date, suffix)
    })
}

/// Strategy for generating due dates across 2025
pub fn due_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..365u64)
        .prop_map(|days| NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date") + Days::new(days))
}

/// Strategy for generating creation timestamps within 2025
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365i64, 0i64..86_400i64).prop_map(|(days, seconds)| {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::seconds(seconds)
    })
}

/// Strategy for generating customer ids
pub fn customer_id_strategy() -> impl Strategy<Value = CustomerId> {
    any::<[u8; 16]>().prop_map(|bytes| CustomerId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating invoice ids
pub fn invoice_id_strategy() -> impl Strategy<Value = InvoiceId> {
    any::<[u8; 16]>().prop_map(|bytes| InvoiceId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{5,10}", "[a-z]{3,8}").prop_map(|(local, domain)| format!("{}@{}.com", local, domain))
}

/// Strategy for generating Indian-format contact numbers
pub fn contact_number_strategy() -> impl Strategy<Value = String> {
    (7_000_000_000u64..10_000_000_000u64).prop_map(|digits| format!("+91-{}", digits))
}

/// Strategy for generating full names
pub fn name_strategy() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,9}", "[A-Z][a-z]{2,9}").prop_map(|(first, last)| format!("{} {}", first, last))
}
