//! Invoice handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::str::FromStr;
use uuid::Uuid;

use core_kernel::{CustomerId, InvoiceId, PortError};
use domain_billing::{generate_invoice_number, NewInvoice, PaymentDetails, PaymentMethod};

use super::{parse_date, require};
use crate::dto::invoices::*;
use crate::error::ApiError;
use crate::AppState;

/// Issues invoices for every customer lacking a pending one this period
pub async fn generate_monthly(
    State(state): State<AppState>,
    Json(body): Json<GenerateInvoicesBody>,
) -> Result<(StatusCode, Json<GenerateInvoicesResponse>), ApiError> {
    let billing_period = require(body.billing_period, "billingPeriod")?;
    let due_date = parse_date(&require(body.due_date, "dueDate")?, "dueDate")?;

    let outcome = state.generator.generate(&billing_period, due_date).await?;

    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// Creates a single invoice
///
/// The invoice number is generated server-side. A collision with an
/// existing number surfaces as a 400; the client retries the request.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(body): Json<CreateInvoiceBody>,
) -> Result<(StatusCode, Json<InvoiceResponse>), ApiError> {
    let customer_id = parse_customer_id(&require(body.customer_id, "customerId")?)?;
    let amount = require(body.amount, "amount")?;
    let billing_period = require(body.billing_period, "billingPeriod")?;
    let due_date = parse_date(&require(body.due_date, "dueDate")?, "dueDate")?;

    let new_invoice = NewInvoice {
        customer_id,
        invoice_number: generate_invoice_number(),
        amount,
        billing_period,
        due_date,
        notes: body.notes,
    };

    let invoice = state
        .invoices
        .create_invoice(new_invoice)
        .await
        .map_err(|e| match e {
            PortError::Conflict { message } => ApiError::BadRequest(message),
            other => ApiError::from(other),
        })?;

    Ok((StatusCode::CREATED, Json(invoice.into())))
}

/// Lists all invoices, newest first, with customer summaries
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceWithCustomerResponse>>, ApiError> {
    let invoices = state.invoices.list_invoices().await?;

    Ok(Json(
        invoices
            .into_iter()
            .map(InvoiceWithCustomerResponse::from)
            .collect(),
    ))
}

/// Gets an invoice by ID with its customer summary
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceWithCustomerResponse>, ApiError> {
    let entry = state.invoices.get_invoice(InvoiceId::from(id)).await?;
    Ok(Json(entry.into()))
}

/// Records a payment against an invoice
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecordPaymentBody>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let payment_method = PaymentMethod::from_str(&require(body.payment_method, "paymentMethod")?)
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let mut details = PaymentDetails::new(payment_method);
    if let Some(value) = body.payment_date.as_deref() {
        details = details.with_date(parse_date(value, "paymentDate")?);
    }
    if let Some(notes) = body.notes {
        details = details.with_notes(notes);
    }

    let invoice = state
        .invoices
        .record_payment(InvoiceId::from(id), details)
        .await?;

    Ok(Json(invoice.into()))
}

/// Deletes an invoice, returning the removed record
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteInvoiceResponse>, ApiError> {
    let invoice = state.invoices.delete_invoice(InvoiceId::from(id)).await?;

    Ok(Json(DeleteInvoiceResponse {
        message: "Invoice deleted successfully".to_string(),
        invoice: invoice.into(),
    }))
}

fn parse_customer_id(value: &str) -> Result<CustomerId, ApiError> {
    CustomerId::from_str(value)
        .map_err(|_| ApiError::validation(format!("Invalid customer id: {}", value)))
}
