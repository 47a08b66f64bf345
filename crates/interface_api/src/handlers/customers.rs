//! Customer handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

use core_kernel::CustomerId;
use domain_customer::{
    CreateCustomerRequest, CustomerQuery, CustomerValidator, PlanType, ServiceAddress,
    UpdateCustomerRequest,
};

use super::{parse_date, require};
use crate::dto::customers::*;
use crate::error::ApiError;
use crate::AppState;

/// Optional filters for the customer listing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersParams {
    pub email: Option<String>,
    pub plan_type: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListCustomersParams {
    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.plan_type.is_none()
            && self.limit.is_none()
            && self.offset.is_none()
    }
}

/// Creates a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomerBody>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let request = parse_create_body(body)?;

    let result = CustomerValidator::validate_request(&request);
    if !result.is_valid {
        return Err(ApiError::validation_details("Validation failed", result.errors));
    }

    let customer = state.customers.create_customer(request).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Lists customers, optionally filtered
pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListCustomersParams>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = if params.is_empty() {
        state.customers.list_customers().await?
    } else {
        state.customers.find_customers(parse_list_params(params)?).await?
    };

    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Gets a customer by ID
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.customers.get_customer(CustomerId::from(id)).await?;
    Ok(Json(customer.into()))
}

/// Updates a customer
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCustomerBody>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let request = parse_update_body(body)?;
    let customer = state
        .customers
        .update_customer(CustomerId::from(id), request)
        .await?;

    Ok(Json(customer.into()))
}

/// Deletes a customer, returning the removed record
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.customers.delete_customer(CustomerId::from(id)).await?;
    Ok(Json(customer.into()))
}

fn parse_create_body(body: CreateCustomerBody) -> Result<CreateCustomerRequest, ApiError> {
    let full_name = require(body.full_name, "fullName")?;
    let address_body = require(body.service_address, "serviceAddress")?;
    let contact_number = require(body.contact_number, "contactNumber")?;
    let email = require(body.email, "email")?;
    let plan_type = parse_plan(&require(body.plan_type, "planType")?)?;

    let subscription_date = body
        .subscription_date
        .as_deref()
        .map(|value| parse_date(value, "subscriptionDate"))
        .transpose()?;

    Ok(CreateCustomerRequest {
        full_name,
        service_address: parse_address(address_body)?,
        contact_number,
        email,
        plan_type,
        subscription_date,
    })
}

fn parse_update_body(body: UpdateCustomerBody) -> Result<UpdateCustomerRequest, ApiError> {
    let service_address = body.service_address.map(parse_address).transpose()?;
    let plan_type = body
        .plan_type
        .as_deref()
        .map(parse_plan)
        .transpose()?;
    let subscription_date = body
        .subscription_date
        .as_deref()
        .map(|value| parse_date(value, "subscriptionDate"))
        .transpose()?;

    Ok(UpdateCustomerRequest {
        full_name: body.full_name,
        service_address,
        contact_number: body.contact_number,
        email: body.email,
        plan_type,
        subscription_date,
    })
}

fn parse_address(body: ServiceAddressBody) -> Result<ServiceAddress, ApiError> {
    let street = require(body.street, "serviceAddress.street")?;
    let city = require(body.city, "serviceAddress.city")?;
    let zip_code = require(body.zip_code, "serviceAddress.zipCode")?;

    let mut address = ServiceAddress::new(street, city, zip_code);
    if let Some(landmark) = body.landmark {
        address = address.with_landmark(landmark);
    }

    Ok(address)
}

fn parse_plan(value: &str) -> Result<PlanType, ApiError> {
    PlanType::from_str(value).map_err(|e| ApiError::validation(e.to_string()))
}

fn parse_list_params(params: ListCustomersParams) -> Result<CustomerQuery, ApiError> {
    let plan_type = params.plan_type.as_deref().map(parse_plan).transpose()?;

    Ok(CustomerQuery {
        email: params.email,
        plan_type,
        limit: params.limit,
        offset: params.offset,
    })
}
