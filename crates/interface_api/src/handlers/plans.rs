//! Plan catalog handler

use axum::Json;

use domain_customer::PlanType;

use crate::dto::customers::PlanResponse;

/// Lists the available subscription plans with derived pricing
pub async fn list_plans() -> Json<Vec<PlanResponse>> {
    let plans = PlanType::ALL
        .iter()
        .map(|plan| PlanResponse {
            plan_type: plan.as_str().to_string(),
            bandwidth_mbps: plan.bandwidth_mbps(),
            monthly_fee: plan.monthly_fee(),
        })
        .collect();

    Json(plans)
}
