/*
 * Responsibility
 * - /customers CRUD
 * - ?partySize=n narrows the list to customers with a larger reservation
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::dto::IncludeListsQuery;
use crate::api::dto::customers::{CustomerForm, CustomerResponse, CustomerWithListsResponse};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{customer_repo, reservation_repo};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerListQuery {
    pub party_size: i32,
}

pub async fn list_customers(
    State(state): State<AppState>,
    Params(query): Params<CustomerListQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let rows = if query.party_size > 0 {
        customer_repo::list_with_party_size_greater_than(&state.db, query.party_size).await?
    } else {
        customer_repo::list(&state.db).await?
    };

    Ok(Json(rows.into_iter().map(CustomerResponse::from).collect()))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Id(customer_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = customer_repo::get(&state.db, customer_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let customer = CustomerResponse::from(row);

    if !query.include_lists {
        return Ok(Json(customer).into_response());
    }

    let reservations = reservation_repo::list_by_customer(&state.db, customer_id).await?;
    Ok(Json(CustomerWithListsResponse {
        customer,
        reservations: reservations.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

pub async fn create_customer(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<CustomerForm>,
) -> Result<Response, AppError> {
    let row = customer_repo::create(
        &state.db,
        &form.first_name,
        &form.last_name,
        &form.email,
        &form.phone_number,
    )
    .await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, customer_id = row.customer_id, "customer created");
    Ok(created(
        format!("/api/customers/{}", row.customer_id),
        CustomerResponse::from(row),
    ))
}

pub async fn update_customer(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(customer_id): Id,
    Validated(form): Validated<CustomerForm>,
) -> Result<StatusCode, AppError> {
    let updated = customer_repo::update(
        &state.db,
        customer_id,
        &form.first_name,
        &form.last_name,
        &form.email,
        &form.phone_number,
    )
    .await?;
    require(updated.is_some(), "customer")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, customer_id, "customer updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_customer(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(customer_id): Id,
) -> Result<StatusCode, AppError> {
    let found = customer_repo::delete(&state.db, customer_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, customer_id, "customer deleted");
    }
    deleted(found, "customer")
}
