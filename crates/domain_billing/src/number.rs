//! Invoice number generation
//!
//! Numbers are advisory identifiers of the form `INV-<yyyy><mm>-<rrrr>`
//! where `rrrr` is a uniformly random four-digit component. Nothing here
//! guarantees uniqueness; the store's unique constraint does, and a
//! collision surfaces as a conflict at insert time.

use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;

/// Generates an invoice number for the current month
pub fn generate_invoice_number() -> String {
    let suffix: u16 = rand::rng().random_range(0..=9999);
    invoice_number_for(Utc::now().date_naive(), suffix)
}

/// Formats an invoice number for a given date and random component
pub fn invoice_number_for(date: NaiveDate, suffix: u16) -> String {
    format!("INV-{:04}{:02}-{:04}", date.year(), date.month(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
        assert_eq!(invoice_number_for(date, 42), "INV-202505-0042");
        assert_eq!(invoice_number_for(date, 0), "INV-202505-0000");
        assert_eq!(invoice_number_for(date, 9999), "INV-202505-9999");
    }

    #[test]
    fn test_single_digit_month_is_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(invoice_number_for(date, 7), "INV-202601-0007");
    }

    #[test]
    fn test_generated_numbers_carry_current_period() {
        let today = Utc::now().date_naive();
        let expected_prefix = format!("INV-{:04}{:02}-", today.year(), today.month());

        for _ in 0..100 {
            let number = generate_invoice_number();
            assert!(number.starts_with(&expected_prefix));
            assert_eq!(number.len(), expected_prefix.len() + 4);

            let suffix: u16 = number[expected_prefix.len()..].parse().unwrap();
            assert!(suffix <= 9999);
        }
    }
}
