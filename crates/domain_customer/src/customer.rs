//! Customer entity
//!
//! The Customer aggregate represents a subscriber of the ISP. Each customer
//! is on exactly one plan from the fixed catalog; the record carries the
//! bandwidth and monthly fee derived from that plan so downstream billing
//! never needs the catalog at read time.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;
use crate::plan::PlanType;

/// The address where service is delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAddress {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    /// Nearby landmark used by field technicians
    pub landmark: Option<String>,
}

impl ServiceAddress {
    /// Creates a new service address without a landmark
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            landmark: None,
        }
    }

    /// Sets the landmark, consuming and returning self
    pub fn with_landmark(mut self, landmark: impl Into<String>) -> Self {
        self.landmark = Some(landmark.into());
        self
    }

    /// Formats the address for display
    pub fn format(&self) -> String {
        let mut lines = vec![self.street.clone()];
        lines.push(format!("{} {}", self.city, self.zip_code));
        if let Some(landmark) = &self.landmark {
            lines.push(format!("Near {}", landmark));
        }
        lines.join("\n")
    }
}

/// A subscriber of the ISP
///
/// # Derived Fields
///
/// `bandwidth_mbps` and `monthly_fee` always equal the plan catalog's values
/// for `plan_type`. They are recomputed on construction and on every plan
/// change, and are never settable independently.
///
/// # Examples
///
/// ```rust
/// use domain_customer::customer::{Customer, ServiceAddress};
/// use domain_customer::plan::PlanType;
/// use chrono::NaiveDate;
///
/// let mut customer = Customer::new(
///     "Ravi Kumar",
///     ServiceAddress::new("45 Nehru Street", "Chennai", "600001"),
///     "+91-9844455566",
///     "ravi@example.com",
///     PlanType::Basic,
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// );
/// assert_eq!(customer.bandwidth_mbps, 50);
///
/// customer.change_plan(PlanType::Premium);
/// assert_eq!(customer.bandwidth_mbps, 300);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier
    pub id: CustomerId,
    /// Full legal name
    pub full_name: String,
    /// Where service is delivered
    pub service_address: ServiceAddress,
    /// Primary phone number
    pub contact_number: String,
    /// Primary email address
    pub email: String,
    /// Current subscription plan
    pub plan_type: PlanType,
    /// Download bandwidth in Mbps, derived from the plan
    pub bandwidth_mbps: i32,
    /// Monthly subscription fee, derived from the plan
    pub monthly_fee: Decimal,
    /// When the subscription started
    pub subscription_date: NaiveDate,
    /// When this customer was created
    pub created_at: DateTime<Utc>,
    /// When this customer was last updated
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer with derived fields computed from the plan
    pub fn new(
        full_name: impl Into<String>,
        service_address: ServiceAddress,
        contact_number: impl Into<String>,
        email: impl Into<String>,
        plan_type: PlanType,
        subscription_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CustomerId::new_v7(),
            full_name: full_name.into(),
            service_address,
            contact_number: contact_number.into(),
            email: email.into(),
            plan_type,
            bandwidth_mbps: plan_type.bandwidth_mbps(),
            monthly_fee: plan_type.monthly_fee(),
            subscription_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the customer to a new plan, recomputing the derived fields
    pub fn change_plan(&mut self, plan_type: PlanType) {
        self.plan_type = plan_type;
        self.bandwidth_mbps = plan_type.bandwidth_mbps();
        self.monthly_fee = plan_type.monthly_fee();
        self.updated_at = Utc::now();
    }

    /// Checks that the derived fields match the catalog for the current plan
    ///
    /// # Returns
    ///
    /// `true` if bandwidth and fee are consistent with `plan_type`
    pub fn derived_fields_consistent(&self) -> bool {
        self.bandwidth_mbps == self.plan_type.bandwidth_mbps()
            && self.monthly_fee == self.plan_type.monthly_fee()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_customer() -> Customer {
        Customer::new(
            "Asha Rao",
            ServiceAddress::new("12 MG Road", "Bengaluru", "560001"),
            "+91-9800011122",
            "asha@example.com",
            PlanType::Standard,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_derives_plan_fields() {
        let customer = create_test_customer();
        assert_eq!(customer.plan_type, PlanType::Standard);
        assert_eq!(customer.bandwidth_mbps, 100);
        assert_eq!(customer.monthly_fee, dec!(1100));
        assert!(customer.derived_fields_consistent());
    }

    #[test]
    fn test_change_plan_recomputes() {
        let mut customer = create_test_customer();
        customer.change_plan(PlanType::Premium);

        assert_eq!(customer.plan_type, PlanType::Premium);
        assert_eq!(customer.bandwidth_mbps, 300);
        assert_eq!(customer.monthly_fee, dec!(1500));
        assert!(customer.derived_fields_consistent());
    }

    #[test]
    fn test_derived_drift_detected() {
        let mut customer = create_test_customer();
        customer.bandwidth_mbps = 999;
        assert!(!customer.derived_fields_consistent());
    }

    #[test]
    fn test_address_format_with_landmark() {
        let address = ServiceAddress::new("12 MG Road", "Bengaluru", "560001")
            .with_landmark("Opp. Metro Station");
        let formatted = address.format();

        assert!(formatted.contains("12 MG Road"));
        assert!(formatted.contains("Bengaluru 560001"));
        assert!(formatted.contains("Near Opp. Metro Station"));
    }

    #[test]
    fn test_customer_serialization() {
        let customer = create_test_customer();
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, customer.id);
        assert_eq!(deserialized.monthly_fee, customer.monthly_fee);
    }
}
