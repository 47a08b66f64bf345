//! Monthly invoice generation
//!
//! The generator issues one `Pending` invoice per subscribed customer
//! for a billing period, skipping customers who already hold a pending
//! invoice for that period. It is driven on demand; there is no
//! scheduler.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use domain_customer::CustomerPort;

use crate::error::BillingError;
use crate::invoice::{Invoice, InvoiceStatus};
use crate::number::generate_invoice_number;
use crate::ports::{InvoicePort, NewInvoice};

/// Result of a generation run.
///
/// `skipped` counts every roster member that did not get an invoice in
/// this run, whether they already held a pending invoice or their
/// issuance failed. The two causes are not distinguished.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Invoices issued by this run
    pub created: usize,
    /// Roster members left without a new invoice
    pub skipped: usize,
    /// The issued invoices, in issuance order
    pub invoices: Vec<Invoice>,
}

/// Issues monthly invoices from the customer roster.
///
/// Constructed once at startup and shared; both stores are reached
/// through their ports, so tests drive the generator entirely against
/// in-memory mocks.
pub struct InvoiceGenerator {
    customers: Arc<dyn CustomerPort>,
    invoices: Arc<dyn InvoicePort>,
}

impl InvoiceGenerator {
    pub fn new(customers: Arc<dyn CustomerPort>, invoices: Arc<dyn InvoicePort>) -> Self {
        Self { customers, invoices }
    }

    /// Runs one generation pass for the given billing period.
    ///
    /// Each customer's invoice amount is their current monthly fee.
    /// Only a `Pending` invoice for the same period blocks re-issuance;
    /// paid or overdue history does not. Issuance is sequential, and a
    /// single customer's failure is logged and skipped without
    /// aborting the rest of the run.
    ///
    /// # Errors
    ///
    /// - `BillingError::NoCustomers` when the roster is empty.
    /// - `BillingError::Port` when a roster or pending-set read fails.
    pub async fn generate(
        &self,
        billing_period: &str,
        due_date: NaiveDate,
    ) -> Result<GenerationOutcome, BillingError> {
        let roster = self.customers.list_customers().await?;
        if roster.is_empty() {
            return Err(BillingError::NoCustomers);
        }

        let already_billed: HashSet<_> = self
            .invoices
            .find_billed_customers(billing_period, InvoiceStatus::Pending)
            .await?
            .into_iter()
            .collect();

        let to_create: Vec<_> = roster
            .iter()
            .filter(|customer| !already_billed.contains(&customer.id))
            .collect();

        if to_create.is_empty() {
            return Ok(GenerationOutcome {
                created: 0,
                skipped: roster.len(),
                invoices: Vec::new(),
            });
        }

        let mut issued = Vec::new();
        for customer in to_create {
            let new_invoice = NewInvoice {
                customer_id: customer.id,
                invoice_number: generate_invoice_number(),
                amount: customer.monthly_fee,
                billing_period: billing_period.to_string(),
                due_date,
                notes: None,
            };

            match self.invoices.create_invoice(new_invoice).await {
                Ok(invoice) => issued.push(invoice),
                Err(err) => {
                    warn!(
                        customer_id = %customer.id,
                        billing_period,
                        error = %err,
                        "Invoice issuance failed, skipping customer"
                    );
                }
            }
        }

        let created = issued.len();
        Ok(GenerationOutcome {
            created,
            skipped: roster.len() - created,
            invoices: issued,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_customer::{Customer, MockCustomerPort, PlanType, ServiceAddress};

    use crate::ports::mock::MockInvoicePort;

    fn subscriber(name: &str, plan: PlanType) -> Customer {
        Customer::new(
            name,
            ServiceAddress::new("12 MG Road", "Bengaluru", "560001"),
            "+91-9800011122",
            format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            plan,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()
    }

    #[tokio::test]
    async fn test_empty_roster_is_an_error() {
        let generator = InvoiceGenerator::new(
            Arc::new(MockCustomerPort::new()),
            Arc::new(MockInvoicePort::new()),
        );

        let err = generator.generate("2025-05", due_date()).await.unwrap_err();
        assert!(matches!(err, BillingError::NoCustomers));
    }

    #[tokio::test]
    async fn test_fresh_roster_is_fully_invoiced() {
        let customers = vec![
            subscriber("Asha Rao", PlanType::Basic),
            subscriber("Ravi Kumar", PlanType::Standard),
            subscriber("Meena Iyer", PlanType::Premium),
        ];
        let generator = InvoiceGenerator::new(
            Arc::new(MockCustomerPort::with_customers(customers).await),
            Arc::new(MockInvoicePort::new()),
        );

        let outcome = generator.generate("2025-05", due_date()).await.unwrap();

        assert_eq!(outcome.created, 3);
        assert_eq!(outcome.skipped, 0);
        for invoice in &outcome.invoices {
            assert_eq!(invoice.status, InvoiceStatus::Pending);
            assert_eq!(invoice.billing_period, "2025-05");
        }
    }
}
