use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::api::dto::order_items::{OrderItemForm, OrderItemResponse};
use crate::api::extractors::{AuthCtxExtractor, Id, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{menu_item_repo, order_item_repo, order_repo};
use crate::state::AppState;

pub async fn list_order_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderItemResponse>>, AppError> {
    let rows = order_item_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(OrderItemResponse::from).collect()))
}

pub async fn get_order_item(
    State(state): State<AppState>,
    Id(order_item_id): Id,
) -> Result<Json<OrderItemResponse>, AppError> {
    let row = order_item_repo::get(&state.db, order_item_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(row.into()))
}

async fn require_references(state: &AppState, form: &OrderItemForm) -> Result<(), AppError> {
    require(order_repo::exists(&state.db, form.order_id).await?, "order")?;
    require(
        menu_item_repo::exists(&state.db, form.menu_item_id).await?,
        "menu item",
    )
}

pub async fn create_order_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<OrderItemForm>,
) -> Result<Response, AppError> {
    require_references(&state, &form).await?;

    let row =
        order_item_repo::create(&state.db, form.order_id, form.menu_item_id, form.quantity).await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, order_item_id = row.order_item_id, "order item created");
    Ok(created(
        format!("/api/order-items/{}", row.order_item_id),
        OrderItemResponse::from(row),
    ))
}

pub async fn update_order_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(order_item_id): Id,
    Validated(form): Validated<OrderItemForm>,
) -> Result<StatusCode, AppError> {
    require_references(&state, &form).await?;

    let updated = order_item_repo::update(
        &state.db,
        order_item_id,
        form.order_id,
        form.menu_item_id,
        form.quantity,
    )
    .await?;
    require(updated.is_some(), "order item")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, order_item_id, "order item updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_order_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(order_item_id): Id,
) -> Result<StatusCode, AppError> {
    let found = order_item_repo::delete(&state.db, order_item_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, order_item_id, "order item deleted");
    }
    deleted(found, "order item")
}
