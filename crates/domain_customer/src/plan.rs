//! Service plan catalog
//!
//! Plans are a fixed lookup table: each plan type maps to a download
//! bandwidth and a monthly fee. Customer records store the derived values,
//! which must always match this table for the customer's current plan.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CustomerError;

/// Subscription plan tiers offered to customers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    Basic,
    Standard,
    Premium,
}

impl PlanType {
    /// All plan types in catalog order
    pub const ALL: [PlanType; 3] = [PlanType::Basic, PlanType::Standard, PlanType::Premium];

    /// Download bandwidth for this plan in Mbps
    pub fn bandwidth_mbps(&self) -> i32 {
        match self {
            PlanType::Basic => 50,
            PlanType::Standard => 100,
            PlanType::Premium => 300,
        }
    }

    /// Monthly subscription fee for this plan
    pub fn monthly_fee(&self) -> Decimal {
        match self {
            PlanType::Basic => dec!(800),
            PlanType::Standard => dec!(1100),
            PlanType::Premium => dec!(1500),
        }
    }

    /// Canonical string form, matching the wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Basic => "Basic",
            PlanType::Standard => "Standard",
            PlanType::Premium => "Premium",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(PlanType::Basic),
            "Standard" => Ok(PlanType::Standard),
            "Premium" => Ok(PlanType::Premium),
            other => Err(CustomerError::UnknownPlan(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_bandwidth() {
        assert_eq!(PlanType::Basic.bandwidth_mbps(), 50);
        assert_eq!(PlanType::Standard.bandwidth_mbps(), 100);
        assert_eq!(PlanType::Premium.bandwidth_mbps(), 300);
    }

    #[test]
    fn test_catalog_monthly_fee() {
        assert_eq!(PlanType::Basic.monthly_fee(), dec!(800));
        assert_eq!(PlanType::Standard.monthly_fee(), dec!(1100));
        assert_eq!(PlanType::Premium.monthly_fee(), dec!(1500));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for plan in PlanType::ALL {
            let parsed: PlanType = plan.to_string().parse().unwrap();
            assert_eq!(parsed, plan);
        }
    }

    #[test]
    fn test_parse_unknown_plan() {
        let result = "Gold".parse::<PlanType>();
        assert!(matches!(result, Err(CustomerError::UnknownPlan(_))));
    }

    #[test]
    fn test_json_form_matches_as_str() {
        let json = serde_json::to_string(&PlanType::Premium).unwrap();
        assert_eq!(json, "\"Premium\"");

        let parsed: PlanType = serde_json::from_str("\"Basic\"").unwrap();
        assert_eq!(parsed, PlanType::Basic);
    }
}
