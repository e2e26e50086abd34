use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::IncludeListsQuery;
use crate::api::dto::orders::{OrderForm, OrderResponse, OrderWithListsResponse};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{employee_repo, order_item_repo, order_repo, reservation_repo};
use crate::state::AppState;

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let rows = order_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(OrderResponse::from).collect()))
}

pub async fn get_order(
    State(state): State<AppState>,
    Id(order_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = order_repo::get(&state.db, order_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let order = OrderResponse::from(row);

    if !query.include_lists {
        return Ok(Json(order).into_response());
    }

    let order_items = order_item_repo::list_by_order(&state.db, order_id).await?;
    Ok(Json(OrderWithListsResponse {
        order,
        order_items: order_items.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

async fn require_references(state: &AppState, form: &OrderForm) -> Result<(), AppError> {
    require(
        reservation_repo::exists(&state.db, form.reservation_id).await?,
        "reservation",
    )?;
    require(
        employee_repo::exists(&state.db, form.employee_id).await?,
        "employee",
    )
}

pub async fn create_order(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<OrderForm>,
) -> Result<Response, AppError> {
    require_references(&state, &form).await?;
    // validated above: the date is present
    let order_date = form.order_date.ok_or(AppError::Internal)?;

    let row = order_repo::create(
        &state.db,
        form.reservation_id,
        form.employee_id,
        order_date,
        form.total_amount,
    )
    .await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, order_id = row.order_id, "order created");
    Ok(created(
        format!("/api/orders/{}", row.order_id),
        OrderResponse::from(row),
    ))
}

pub async fn update_order(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(order_id): Id,
    Validated(form): Validated<OrderForm>,
) -> Result<StatusCode, AppError> {
    require_references(&state, &form).await?;
    let order_date = form.order_date.ok_or(AppError::Internal)?;

    let updated = order_repo::update(
        &state.db,
        order_id,
        form.reservation_id,
        form.employee_id,
        order_date,
        form.total_amount,
    )
    .await?;
    require(updated.is_some(), "order")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, order_id, "order updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_order(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(order_id): Id,
) -> Result<StatusCode, AppError> {
    let found = order_repo::delete(&state.db, order_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, order_id, "order deleted");
    }
    deleted(found, "order")
}
