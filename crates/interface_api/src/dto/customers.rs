//! Customer DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_customer::{Customer, ServiceAddress};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddressBody {
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub landmark: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerBody {
    pub full_name: Option<String>,
    pub service_address: Option<ServiceAddressBody>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub plan_type: Option<String>,
    pub subscription_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerBody {
    pub full_name: Option<String>,
    pub service_address: Option<ServiceAddressBody>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub plan_type: Option<String>,
    pub subscription_date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddressResponse {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub landmark: Option<String>,
}

impl From<ServiceAddress> for ServiceAddressResponse {
    fn from(address: ServiceAddress) -> Self {
        Self {
            street: address.street,
            city: address.city,
            zip_code: address.zip_code,
            landmark: address.landmark,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub service_address: ServiceAddressResponse,
    pub contact_number: String,
    pub email: String,
    pub plan_type: String,
    pub bandwidth_mbps: i32,
    pub monthly_fee: Decimal,
    pub subscription_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.into(),
            full_name: customer.full_name,
            service_address: customer.service_address.into(),
            contact_number: customer.contact_number,
            email: customer.email,
            plan_type: customer.plan_type.as_str().to_string(),
            bandwidth_mbps: customer.bandwidth_mbps,
            monthly_fee: customer.monthly_fee,
            subscription_date: customer.subscription_date,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub plan_type: String,
    pub bandwidth_mbps: i32,
    pub monthly_fee: Decimal,
}
