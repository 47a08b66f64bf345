//! Invoice DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_billing::{CustomerSummary, GenerationOutcome, Invoice, InvoiceWithCustomer};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvoicesBody {
    pub billing_period: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceBody {
    pub customer_id: Option<String>,
    pub amount: Option<Decimal>,
    pub billing_period: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentBody {
    pub payment_date: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub amount: Decimal,
    pub billing_period: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id.into(),
            customer_id: invoice.customer_id.into(),
            invoice_number: invoice.invoice_number,
            amount: invoice.amount,
            billing_period: invoice.billing_period,
            due_date: invoice.due_date,
            status: invoice.status.as_str().to_string(),
            payment_date: invoice.payment_date,
            payment_method: invoice.payment_method.map(|m| m.as_str().to_string()),
            notes: invoice.notes,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummaryResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub plan_type: String,
    pub monthly_fee: Decimal,
}

impl From<CustomerSummary> for CustomerSummaryResponse {
    fn from(summary: CustomerSummary) -> Self {
        Self {
            id: summary.id.into(),
            full_name: summary.full_name,
            email: summary.email,
            contact_number: summary.contact_number,
            plan_type: summary.plan_type.as_str().to_string(),
            monthly_fee: summary.monthly_fee,
        }
    }
}

/// An invoice with its customer summary inlined
///
/// The invoice fields are flattened to the top level so the wire shape
/// is a plain invoice object with one extra `customer` key.
#[derive(Debug, Serialize)]
pub struct InvoiceWithCustomerResponse {
    #[serde(flatten)]
    pub invoice: InvoiceResponse,
    pub customer: Option<CustomerSummaryResponse>,
}

impl From<InvoiceWithCustomer> for InvoiceWithCustomerResponse {
    fn from(entry: InvoiceWithCustomer) -> Self {
        Self {
            invoice: entry.invoice.into(),
            customer: entry.customer.map(CustomerSummaryResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvoicesResponse {
    pub message: String,
    pub created: usize,
    pub skipped: usize,
    pub invoices: Vec<InvoiceResponse>,
}

impl From<GenerationOutcome> for GenerateInvoicesResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            message: "Invoices generated successfully".to_string(),
            created: outcome.created,
            skipped: outcome.skipped,
            invoices: outcome.invoices.into_iter().map(InvoiceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvoiceResponse {
    pub message: String,
    pub invoice: InvoiceResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CustomerId;
    use rust_decimal_macros::dec;

    fn sample_invoice() -> Invoice {
        Invoice::new(
            CustomerId::new(),
            "INV-202505-0042".to_string(),
            dec!(1100),
            "2025-05".to_string(),
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
        )
    }

    #[test]
    fn test_invoice_response_wire_shape() {
        let response = InvoiceResponse::from(sample_invoice());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["invoiceNumber"], "INV-202505-0042");
        assert_eq!(json["billingPeriod"], "2025-05");
        assert_eq!(json["status"], "Pending");
        assert!(json["paymentDate"].is_null());
    }

    #[test]
    fn test_joined_response_flattens_invoice_fields() {
        let entry = InvoiceWithCustomer {
            invoice: sample_invoice(),
            customer: None,
        };

        let response = InvoiceWithCustomerResponse::from(entry);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["invoiceNumber"], "INV-202505-0042");
        assert!(json["customer"].is_null());
        assert!(json.get("invoice").is_none());
    }
}
