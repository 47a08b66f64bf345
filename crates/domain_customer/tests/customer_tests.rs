//! Comprehensive tests for domain_customer

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use domain_customer::customer::{Customer, ServiceAddress};
use domain_customer::plan::PlanType;
use domain_customer::ports::CustomerQuery;

// ============================================================================
// Plan Catalog Tests
// ============================================================================

mod plan_tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        let expected = [
            (PlanType::Basic, 50, dec!(800)),
            (PlanType::Standard, 100, dec!(1100)),
            (PlanType::Premium, 300, dec!(1500)),
        ];

        for (plan, bandwidth, fee) in expected {
            assert_eq!(plan.bandwidth_mbps(), bandwidth);
            assert_eq!(plan.monthly_fee(), fee);
        }
    }

    #[test]
    fn test_all_contains_every_plan() {
        assert_eq!(PlanType::ALL.len(), 3);
        assert!(PlanType::ALL.contains(&PlanType::Basic));
        assert!(PlanType::ALL.contains(&PlanType::Standard));
        assert!(PlanType::ALL.contains(&PlanType::Premium));
    }

    #[test]
    fn test_wire_form() {
        for plan in PlanType::ALL {
            let json = serde_json::to_string(&plan).unwrap();
            assert_eq!(json, format!("\"{}\"", plan.as_str()));
        }
    }

    #[test]
    fn test_parse_rejects_lowercase() {
        assert!("basic".parse::<PlanType>().is_err());
    }
}

// ============================================================================
// Customer Tests
// ============================================================================

mod customer_tests {
    use super::*;

    fn create_test_customer(plan: PlanType) -> Customer {
        Customer::new(
            "Asha Rao",
            ServiceAddress::new("12 MG Road", "Bengaluru", "560001"),
            "+91-9800011122",
            "asha@example.com",
            plan,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_customer_fields() {
        let customer = create_test_customer(PlanType::Basic);

        assert_eq!(customer.full_name, "Asha Rao");
        assert_eq!(customer.service_address.city, "Bengaluru");
        assert_eq!(customer.plan_type, PlanType::Basic);
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[test]
    fn test_derivation_for_every_plan() {
        for plan in PlanType::ALL {
            let customer = create_test_customer(plan);
            assert_eq!(customer.bandwidth_mbps, plan.bandwidth_mbps());
            assert_eq!(customer.monthly_fee, plan.monthly_fee());
        }
    }

    #[test]
    fn test_change_plan_touches_updated_at() {
        let mut customer = create_test_customer(PlanType::Basic);
        let before = customer.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(1));
        customer.change_plan(PlanType::Standard);

        assert!(customer.updated_at > before);
        assert_eq!(customer.monthly_fee, dec!(1100));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let customer = create_test_customer(PlanType::Premium);
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, customer.id);
        assert_eq!(deserialized.plan_type, PlanType::Premium);
        assert_eq!(deserialized.service_address, customer.service_address);
    }
}

// ============================================================================
// Service Address Tests
// ============================================================================

mod address_tests {
    use super::*;

    #[test]
    fn test_address_new() {
        let address = ServiceAddress::new("45 Nehru Street", "Chennai", "600001");

        assert_eq!(address.street, "45 Nehru Street");
        assert_eq!(address.city, "Chennai");
        assert_eq!(address.zip_code, "600001");
        assert!(address.landmark.is_none());
    }

    #[test]
    fn test_address_format_simple() {
        let address = ServiceAddress::new("45 Nehru Street", "Chennai", "600001");
        let formatted = address.format();

        assert!(formatted.contains("45 Nehru Street"));
        assert!(formatted.contains("Chennai 600001"));
        assert!(!formatted.contains("Near"));
    }

    #[test]
    fn test_address_format_with_landmark() {
        let address =
            ServiceAddress::new("45 Nehru Street", "Chennai", "600001").with_landmark("Bus Depot");
        let formatted = address.format();

        assert!(formatted.contains("Near Bus Depot"));
    }

    #[test]
    fn test_address_serialization() {
        let address = ServiceAddress::new("12 MG Road", "Bengaluru", "560001");
        let json = serde_json::to_string(&address).unwrap();
        let deserialized: ServiceAddress = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, address);
    }
}

// ============================================================================
// Query Tests
// ============================================================================

mod query_tests {
    use super::*;

    #[test]
    fn test_query_by_email() {
        let query = CustomerQuery::by_email("asha@example.com");
        assert_eq!(query.email.as_deref(), Some("asha@example.com"));
        assert!(query.plan_type.is_none());
    }

    #[test]
    fn test_query_by_plan_with_pagination() {
        let query = CustomerQuery::by_plan(PlanType::Basic).paginate(10, 20);
        assert_eq!(query.plan_type, Some(PlanType::Basic));
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(20));
    }
}
