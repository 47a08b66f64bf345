//! Deterministic Test Fixtures
//!
//! Stable values for tests, so assertions can name exact ids, dates,
//! and amounts instead of capturing whatever a generator produced.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{CustomerId, InvoiceId, TeamId, UserId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Common invoice amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// Catalog fee for the Basic plan
    pub fn basic_fee() -> Decimal {
        dec!(800)
    }

    /// Catalog fee for the Standard plan
    pub fn standard_fee() -> Decimal {
        dec!(1100)
    }

    /// Catalog fee for the Premium plan
    pub fn premium_fee() -> Decimal {
        dec!(1500)
    }

    /// An amount with sub-rupee precision, for rounding-sensitive tests
    pub fn odd_amount() -> Decimal {
        dec!(123.45)
    }
}

/// Common dates and timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    /// Default subscription start used by the customer builder
    pub fn subscription_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    /// The billing period most tests generate against
    pub fn billing_period() -> &'static str {
        "2025-05"
    }

    /// Due date matching [`TemporalFixtures::billing_period`]
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 31).expect("valid date")
    }

    pub fn payment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date")
    }

    /// A fixed instant for created/updated stamps in ordering tests
    pub fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0)
            .single()
            .expect("valid instant")
    }

    /// Formats an arbitrary year and month as a billing period
    pub fn period(year: i32, month: u32) -> String {
        format!("{:04}-{:02}", year, month)
    }
}

/// Deterministic identifiers.
///
/// The uuids are fixed so tests can assert on exact ids across process
/// boundaries, for example after a round trip through the database.
pub struct IdFixtures;

impl IdFixtures {
    pub fn customer_id_1() -> CustomerId {
        CustomerId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").expect("valid uuid"),
        )
    }

    pub fn customer_id_2() -> CustomerId {
        CustomerId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").expect("valid uuid"),
        )
    }

    pub fn customer_id_3() -> CustomerId {
        CustomerId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").expect("valid uuid"),
        )
    }

    pub fn invoice_id_1() -> InvoiceId {
        InvoiceId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440011").expect("valid uuid"),
        )
    }

    pub fn invoice_id_2() -> InvoiceId {
        InvoiceId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440012").expect("valid uuid"),
        )
    }

    pub fn user_id_1() -> UserId {
        UserId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440021").expect("valid uuid"),
        )
    }

    pub fn team_id_1() -> TeamId {
        TeamId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440031").expect("valid uuid"),
        )
    }
}

/// Common string values
pub struct StringFixtures;

impl StringFixtures {
    pub fn full_name() -> &'static str {
        "Asha Rao"
    }

    pub fn email() -> &'static str {
        "asha@example.com"
    }

    pub fn contact_number() -> &'static str {
        "+91-9800011122"
    }

    pub fn street() -> &'static str {
        "12 MG Road"
    }

    pub fn city() -> &'static str {
        "Bengaluru"
    }

    pub fn zip_code() -> &'static str {
        "560001"
    }

    pub fn landmark() -> &'static str {
        "Opp. Metro Station"
    }

    pub fn invoice_number() -> &'static str {
        "INV-202505-0042"
    }

    pub fn username() -> &'static str {
        "asha.rao"
    }

    pub fn team_name() -> &'static str {
        "South Zone Field Ops"
    }

    /// A structurally valid Argon2 PHC string.
    ///
    /// It is not the hash of any password; use
    /// `domain_account::hash_password` when a test needs to log in.
    pub fn password_hash() -> &'static str {
        "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_customer::PlanType;

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(IdFixtures::customer_id_1(), IdFixtures::customer_id_1());
        assert_ne!(IdFixtures::customer_id_1(), IdFixtures::customer_id_2());
    }

    #[test]
    fn test_fees_match_plan_catalog() {
        assert_eq!(AmountFixtures::basic_fee(), PlanType::Basic.monthly_fee());
        assert_eq!(AmountFixtures::standard_fee(), PlanType::Standard.monthly_fee());
        assert_eq!(AmountFixtures::premium_fee(), PlanType::Premium.monthly_fee());
    }

    #[test]
    fn test_period_is_zero_padded() {
        assert_eq!(TemporalFixtures::period(2025, 5), "2025-05");
        assert_eq!(TemporalFixtures::period(2026, 12), "2026-12");
        assert_eq!(TemporalFixtures::billing_period(), "2025-05");
    }

    #[test]
    fn test_due_date_falls_inside_billing_period() {
        let due = TemporalFixtures::due_date();
        assert_eq!(due.to_string(), "2025-05-31");
        assert_eq!(TemporalFixtures::period(2025, 5), TemporalFixtures::billing_period());
    }
}
