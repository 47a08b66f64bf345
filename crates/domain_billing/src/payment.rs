//! Payment details
//!
//! Payments are not standalone records; recording one mutates the
//! invoice it settles. This module carries the accepted methods and the
//! details a caller supplies when settling an invoice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BillingError;

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash at the office or to a field agent
    Cash,
    /// Credit or debit card
    Card,
    /// Direct bank transfer
    BankTransfer,
    /// UPI transfer
    Upi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::Upi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "BankTransfer",
            PaymentMethod::Upi => "Upi",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(PaymentMethod::Cash),
            "Card" => Ok(PaymentMethod::Card),
            "BankTransfer" => Ok(PaymentMethod::BankTransfer),
            "Upi" => Ok(PaymentMethod::Upi),
            other => Err(BillingError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Details supplied when settling an invoice.
///
/// The payment date defaults to today when omitted. Notes, when
/// present, replace the invoice's existing notes.
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    /// When the payment was received; today when omitted
    pub payment_date: Option<NaiveDate>,
    /// How the payment was made
    pub payment_method: PaymentMethod,
    /// Free-text notes to store on the invoice
    pub notes: Option<String>,
}

impl PaymentDetails {
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_date: None,
            payment_method,
            notes: None,
        }
    }

    pub fn with_date(mut self, payment_date: NaiveDate) -> Self {
        self.payment_date = Some(payment_date);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
