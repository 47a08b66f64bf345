//! Invoice records
//!
//! An invoice bills one customer for one billing period. Records are
//! mutated only to register a payment; everything else is immutable
//! after issuance.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CustomerId, InvoiceId};

use crate::error::BillingError;
use crate::payment::{PaymentDetails, PaymentMethod};

/// Invoice status.
///
/// The only programmatic transition is `Pending` to `Paid`. `Overdue`
/// is an advisory label kept for imported data and reporting; nothing
/// in the system assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Issued, payment not yet received
    Pending,
    /// Payment recorded
    Paid,
    /// Past due, advisory only
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(InvoiceStatus::Pending),
            "Paid" => Ok(InvoiceStatus::Paid),
            "Overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(BillingError::UnknownStatus(other.to_string())),
        }
    }
}

/// An invoice for one customer and one billing period.
///
/// `customer_id` is a weak reference: issuance never checks that the
/// customer exists, and the customer may be deleted afterwards. Reads
/// that want customer details join at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Customer being billed (weak reference, never validated)
    pub customer_id: CustomerId,
    /// Human-readable invoice number, unique across all invoices
    pub invoice_number: String,
    /// Amount due
    pub amount: Decimal,
    /// Billing period label, e.g. "2025-05". Opaque, not validated.
    pub billing_period: String,
    /// Payment due date
    pub due_date: NaiveDate,
    /// Current status
    pub status: InvoiceStatus,
    /// When payment was received, absent until paid
    pub payment_date: Option<NaiveDate>,
    /// How payment was made, absent until paid
    pub payment_method: Option<PaymentMethod>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a pending invoice
    pub fn new(
        customer_id: CustomerId,
        invoice_number: impl Into<String>,
        amount: Decimal,
        billing_period: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new_v7(),
            customer_id,
            invoice_number: invoice_number.into(),
            amount,
            billing_period: billing_period.into(),
            due_date,
            status: InvoiceStatus::Pending,
            payment_date: None,
            payment_method: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Records a payment against the invoice.
    ///
    /// Sets the status to `Paid` and stamps the payment date with the
    /// given value, or today when omitted. Calling this on an already
    /// paid invoice overwrites the previous payment details; there is
    /// no double-payment guard. Notes are replaced only when provided.
    pub fn record_payment(&mut self, details: PaymentDetails) {
        self.status = InvoiceStatus::Paid;
        self.payment_date = Some(
            details
                .payment_date
                .unwrap_or_else(|| Utc::now().date_naive()),
        );
        self.payment_method = Some(details.payment_method);
        if let Some(notes) = details.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
    }

    /// True when the due date has passed without payment.
    ///
    /// This is a computed view; it never changes the stored status.
    pub fn is_overdue(&self) -> bool {
        self.status != InvoiceStatus::Paid && Utc::now().date_naive() > self.due_date
    }
}
