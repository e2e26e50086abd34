/*
 * Responsibility
 * - /employees CRUD
 * - ?withRestaurantDetails=true, /employees/managers, /employees/{id}/average-order-amount
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::employees::{
    EmployeeForm, EmployeeListQuery, EmployeeResponse, EmployeeWithListsResponse,
    EmployeeWithRestaurantDetailsResponse,
};
use crate::api::dto::{Amount, IncludeListsQuery};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{employee_repo, order_repo, restaurant_repo};
use crate::state::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
    Params(query): Params<EmployeeListQuery>,
) -> Result<Response, AppError> {
    if query.with_restaurant_details {
        let rows = employee_repo::list_with_restaurant_details(&state.db).await?;
        let body: Vec<EmployeeWithRestaurantDetailsResponse> =
            rows.into_iter().map(Into::into).collect();
        return Ok(Json(body).into_response());
    }

    let rows = employee_repo::list(&state.db).await?;
    let body: Vec<EmployeeResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

pub async fn list_managers(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let rows = employee_repo::list_by_position(&state.db, employee_repo::MANAGER_POSITION).await?;
    Ok(Json(rows.into_iter().map(EmployeeResponse::from).collect()))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Id(employee_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = employee_repo::get(&state.db, employee_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let employee = EmployeeResponse::from(row);

    if !query.include_lists {
        return Ok(Json(employee).into_response());
    }

    let orders = order_repo::list_by_employee(&state.db, employee_id).await?;
    Ok(Json(EmployeeWithListsResponse {
        employee,
        orders: orders.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

pub async fn create_employee(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<EmployeeForm>,
) -> Result<Response, AppError> {
    require(
        restaurant_repo::exists(&state.db, form.restaurant_id).await?,
        "restaurant",
    )?;

    let row = employee_repo::create(
        &state.db,
        form.restaurant_id,
        &form.first_name,
        &form.last_name,
        &form.position,
    )
    .await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, employee_id = row.employee_id, "employee created");
    Ok(created(
        format!("/api/employees/{}", row.employee_id),
        EmployeeResponse::from(row),
    ))
}

pub async fn update_employee(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(employee_id): Id,
    Validated(form): Validated<EmployeeForm>,
) -> Result<StatusCode, AppError> {
    require(
        restaurant_repo::exists(&state.db, form.restaurant_id).await?,
        "restaurant",
    )?;

    let updated = employee_repo::update(
        &state.db,
        employee_id,
        form.restaurant_id,
        &form.first_name,
        &form.last_name,
        &form.position,
    )
    .await?;
    require(updated.is_some(), "employee")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, employee_id, "employee updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_employee(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(employee_id): Id,
) -> Result<StatusCode, AppError> {
    let found = employee_repo::delete(&state.db, employee_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, employee_id, "employee deleted");
    }
    deleted(found, "employee")
}

pub async fn average_order_amount(
    State(state): State<AppState>,
    Id(employee_id): Id,
) -> Result<Json<Amount>, AppError> {
    let average = employee_repo::average_order_amount(&state.db, employee_id).await?;
    Ok(Json(Amount(average)))
}
