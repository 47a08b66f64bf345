//! Test Data Builders
//!
//! Builders for constructing domain entities with sensible defaults, so
//! tests only spell out the fields they actually care about. `build()`
//! returns the real entity, never a test-only mirror of it.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{CustomerId, InvoiceId, TeamId, UserId};
use domain_account::{Role, Team, User};
use domain_billing::{Invoice, PaymentDetails};
use domain_customer::{Customer, PlanType, ServiceAddress};
use fake::faker::address::en::{CityName, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, IdFixtures, StringFixtures, TemporalFixtures};

/// Builder for customers
pub struct TestCustomerBuilder {
    id: Option<CustomerId>,
    full_name: String,
    address: ServiceAddress,
    contact_number: String,
    email: String,
    plan_type: PlanType,
    subscription_date: NaiveDate,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Creates a builder seeded with fixture values and the Standard plan
    pub fn new() -> Self {
        Self {
            id: None,
            full_name: StringFixtures::full_name().to_string(),
            address: ServiceAddress::new(
                StringFixtures::street(),
                StringFixtures::city(),
                StringFixtures::zip_code(),
            ),
            contact_number: StringFixtures::contact_number().to_string(),
            email: StringFixtures::email().to_string(),
            plan_type: PlanType::Standard,
            subscription_date: TemporalFixtures::subscription_date(),
        }
    }

    /// Creates a builder with randomized personal details.
    ///
    /// Useful when a test inserts many customers and unique emails or
    /// names matter more than exact values.
    pub fn randomized() -> Self {
        let mut builder = Self::new();
        builder.full_name = Name().fake();
        builder.email = SafeEmail().fake();
        builder.contact_number = PhoneNumber().fake();
        builder.address = ServiceAddress::new(
            StreetName().fake::<String>(),
            CityName().fake::<String>(),
            ZipCode().fake::<String>(),
        );
        builder
    }

    /// Pins the customer id instead of generating one
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_address(mut self, address: ServiceAddress) -> Self {
        self.address = address;
        self
    }

    pub fn with_contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.contact_number = contact_number.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_plan(mut self, plan_type: PlanType) -> Self {
        self.plan_type = plan_type;
        self
    }

    pub fn with_subscription_date(mut self, date: NaiveDate) -> Self {
        self.subscription_date = date;
        self
    }

    /// Builds the customer, deriving bandwidth and fee from the plan
    pub fn build(self) -> Customer {
        let mut customer = Customer::new(
            self.full_name,
            self.address,
            self.contact_number,
            self.email,
            self.plan_type,
            self.subscription_date,
        );
        if let Some(id) = self.id {
            customer.id = id;
        }
        customer
    }
}

/// Builder for invoices
pub struct TestInvoiceBuilder {
    id: Option<InvoiceId>,
    customer_id: CustomerId,
    invoice_number: String,
    amount: Decimal,
    billing_period: String,
    due_date: NaiveDate,
    notes: Option<String>,
    payment: Option<PaymentDetails>,
    created_at: Option<DateTime<Utc>>,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder for a pending Standard-fee invoice
    pub fn new() -> Self {
        Self {
            id: None,
            customer_id: IdFixtures::customer_id_1(),
            invoice_number: StringFixtures::invoice_number().to_string(),
            amount: AmountFixtures::standard_fee(),
            billing_period: TemporalFixtures::billing_period().to_string(),
            due_date: TemporalFixtures::due_date(),
            notes: None,
            payment: None,
            created_at: None,
        }
    }

    /// Pins the invoice id instead of generating one
    pub fn with_id(mut self, id: InvoiceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Bills the given customer, copying their id and plan fee
    pub fn for_customer(mut self, customer: &Customer) -> Self {
        self.customer_id = customer.id;
        self.amount = customer.monthly_fee;
        self
    }

    pub fn with_customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = number.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_billing_period(mut self, period: impl Into<String>) -> Self {
        self.billing_period = period.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Records the given payment on the built invoice
    pub fn paid(mut self, details: PaymentDetails) -> Self {
        self.payment = Some(details);
        self
    }

    /// Pins the creation instant, for list-ordering tests
    pub fn with_created_at(mut self, instant: DateTime<Utc>) -> Self {
        self.created_at = Some(instant);
        self
    }

    pub fn build(self) -> Invoice {
        let mut invoice = Invoice::new(
            self.customer_id,
            self.invoice_number,
            self.amount,
            self.billing_period,
            self.due_date,
        );
        if let Some(notes) = self.notes {
            invoice = invoice.with_notes(notes);
        }
        if let Some(id) = self.id {
            invoice.id = id;
        }
        if let Some(instant) = self.created_at {
            invoice.created_at = instant;
            invoice.updated_at = instant;
        }
        if let Some(details) = self.payment {
            invoice.record_payment(details);
        }
        invoice
    }
}

/// Builder for back-office users
pub struct TestUserBuilder {
    id: Option<UserId>,
    username: String,
    email: String,
    full_name: String,
    password_hash: String,
    role: Role,
    team_id: Option<TeamId>,
    active: bool,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserBuilder {
    /// Creates a builder for an active staff account
    pub fn new() -> Self {
        Self {
            id: None,
            username: StringFixtures::username().to_string(),
            email: StringFixtures::email().to_string(),
            full_name: StringFixtures::full_name().to_string(),
            password_hash: StringFixtures::password_hash().to_string(),
            role: Role::Staff,
            team_id: None,
            active: true,
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Builds the account already deactivated
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn build(self) -> User {
        let mut user = User::new(
            self.username,
            self.email,
            self.full_name,
            self.password_hash,
            self.role,
        );
        if let Some(team_id) = self.team_id {
            user = user.with_team(team_id);
        }
        if let Some(id) = self.id {
            user.id = id;
        }
        if !self.active {
            user.deactivate();
        }
        user
    }
}

/// Builder for teams
pub struct TestTeamBuilder {
    id: Option<TeamId>,
    name: String,
    description: Option<String>,
    region: Option<String>,
}

impl Default for TestTeamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTeamBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: StringFixtures::team_name().to_string(),
            description: None,
            region: None,
        }
    }

    pub fn with_id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn build(self) -> Team {
        let mut team = Team::new(self.name);
        if let Some(description) = self.description {
            team = team.with_description(description);
        }
        if let Some(region) = self.region {
            team = team.with_region(region);
        }
        if let Some(id) = self.id {
            team.id = id;
        }
        team
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_billing::{InvoiceStatus, PaymentMethod};
    use rust_decimal_macros::dec;

    #[test]
    fn test_customer_builder_defaults() {
        let customer = TestCustomerBuilder::new().build();

        assert_eq!(customer.full_name, StringFixtures::full_name());
        assert_eq!(customer.plan_type, PlanType::Standard);
        assert_eq!(customer.bandwidth_mbps, 100);
        assert_eq!(customer.monthly_fee, dec!(1100));
        assert!(customer.derived_fields_consistent());
    }

    #[test]
    fn test_customer_builder_pins_id_and_plan() {
        let customer = TestCustomerBuilder::new()
            .with_id(IdFixtures::customer_id_2())
            .with_plan(PlanType::Premium)
            .build();

        assert_eq!(customer.id, IdFixtures::customer_id_2());
        assert_eq!(customer.bandwidth_mbps, 300);
        assert_eq!(customer.monthly_fee, dec!(1500));
    }

    #[test]
    fn test_randomized_customer_keeps_derivation() {
        let customer = TestCustomerBuilder::randomized()
            .with_plan(PlanType::Basic)
            .build();

        assert!(!customer.full_name.is_empty());
        assert!(customer.email.contains('@'));
        assert!(customer.derived_fields_consistent());
    }

    #[test]
    fn test_invoice_builder_defaults_to_pending() {
        let invoice = TestInvoiceBuilder::new().build();

        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert_eq!(invoice.amount, dec!(1100));
        assert_eq!(invoice.billing_period, "2025-05");
        assert!(invoice.payment_date.is_none());
    }

    #[test]
    fn test_invoice_builder_for_customer_copies_fee() {
        let customer = TestCustomerBuilder::new().with_plan(PlanType::Basic).build();
        let invoice = TestInvoiceBuilder::new().for_customer(&customer).build();

        assert_eq!(invoice.customer_id, customer.id);
        assert_eq!(invoice.amount, dec!(800));
    }

    #[test]
    fn test_invoice_builder_paid() {
        let invoice = TestInvoiceBuilder::new()
            .paid(
                PaymentDetails::new(PaymentMethod::Upi)
                    .with_date(TemporalFixtures::payment_date()),
            )
            .build();

        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.payment_date, Some(TemporalFixtures::payment_date()));
        assert_eq!(invoice.payment_method, Some(PaymentMethod::Upi));
    }

    #[test]
    fn test_user_builder_defaults() {
        let user = TestUserBuilder::new().build();

        assert_eq!(user.role, Role::Staff);
        assert!(user.is_active);
        assert!(user.team_id.is_none());
    }

    #[test]
    fn test_user_builder_deactivated_with_team() {
        let user = TestUserBuilder::new()
            .with_role(Role::Manager)
            .with_team(IdFixtures::team_id_1())
            .deactivated()
            .build();

        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.team_id, Some(IdFixtures::team_id_1()));
        assert!(!user.is_active);
    }

    #[test]
    fn test_team_builder() {
        let team = TestTeamBuilder::new()
            .with_description("Installations south of the river")
            .with_region("Bengaluru South")
            .build();

        assert_eq!(team.name, StringFixtures::team_name());
        assert_eq!(team.region.as_deref(), Some("Bengaluru South"));
    }
}
