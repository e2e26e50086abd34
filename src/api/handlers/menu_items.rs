use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::IncludeListsQuery;
use crate::api::dto::menu_items::{MenuItemForm, MenuItemResponse, MenuItemWithListsResponse};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{menu_item_repo, order_item_repo, restaurant_repo};
use crate::state::AppState;

pub async fn list_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemResponse>>, AppError> {
    let rows = menu_item_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(MenuItemResponse::from).collect()))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    Id(menu_item_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = menu_item_repo::get(&state.db, menu_item_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let menu_item = MenuItemResponse::from(row);

    if !query.include_lists {
        return Ok(Json(menu_item).into_response());
    }

    let order_items = order_item_repo::list_by_menu_item(&state.db, menu_item_id).await?;
    Ok(Json(MenuItemWithListsResponse {
        menu_item,
        order_items: order_items.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<MenuItemForm>,
) -> Result<Response, AppError> {
    require(
        restaurant_repo::exists(&state.db, form.restaurant_id).await?,
        "restaurant",
    )?;

    let row = menu_item_repo::create(
        &state.db,
        form.restaurant_id,
        &form.name,
        &form.description,
        form.price,
    )
    .await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, menu_item_id = row.menu_item_id, "menu item created");
    Ok(created(
        format!("/api/menu-items/{}", row.menu_item_id),
        MenuItemResponse::from(row),
    ))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(menu_item_id): Id,
    Validated(form): Validated<MenuItemForm>,
) -> Result<StatusCode, AppError> {
    require(
        restaurant_repo::exists(&state.db, form.restaurant_id).await?,
        "restaurant",
    )?;

    let updated = menu_item_repo::update(
        &state.db,
        menu_item_id,
        form.restaurant_id,
        &form.name,
        &form.description,
        form.price,
    )
    .await?;
    require(updated.is_some(), "menu item")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, menu_item_id, "menu item updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(menu_item_id): Id,
) -> Result<StatusCode, AppError> {
    let found = menu_item_repo::delete(&state.db, menu_item_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, menu_item_id, "menu item deleted");
    }
    deleted(found, "menu item")
}
