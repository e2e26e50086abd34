/*
 * Responsibility
 * - /restaurants CRUD
 * - /restaurants/{id}/total-revenue
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::restaurants::{
    RestaurantForm, RestaurantResponse, RestaurantWithListsResponse,
};
use crate::api::dto::{Amount, IncludeListsQuery};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{employee_repo, menu_item_repo, reservation_repo, restaurant_repo, table_repo};
use crate::state::AppState;

pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let rows = restaurant_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(RestaurantResponse::from).collect()))
}

pub async fn get_restaurant(
    State(state): State<AppState>,
    Id(restaurant_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = restaurant_repo::get(&state.db, restaurant_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let restaurant = RestaurantResponse::from(row);

    if !query.include_lists {
        return Ok(Json(restaurant).into_response());
    }

    let db = &state.db;
    let (tables, employees, menu_items, reservations) = tokio::try_join!(
        table_repo::list_by_restaurant(db, restaurant_id),
        employee_repo::list_by_restaurant(db, restaurant_id),
        menu_item_repo::list_by_restaurant(db, restaurant_id),
        reservation_repo::list_by_restaurant(db, restaurant_id),
    )?;

    Ok(Json(RestaurantWithListsResponse {
        restaurant,
        tables: tables.into_iter().map(Into::into).collect(),
        employees: employees.into_iter().map(Into::into).collect(),
        menu_items: menu_items.into_iter().map(Into::into).collect(),
        reservations: reservations.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

pub async fn create_restaurant(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<RestaurantForm>,
) -> Result<Response, AppError> {
    let row = restaurant_repo::create(
        &state.db,
        &form.name,
        &form.address,
        &form.phone_number,
        &form.opening_hours,
    )
    .await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, restaurant_id = row.restaurant_id, "restaurant created");
    Ok(created(
        format!("/api/restaurants/{}", row.restaurant_id),
        RestaurantResponse::from(row),
    ))
}

pub async fn update_restaurant(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(restaurant_id): Id,
    Validated(form): Validated<RestaurantForm>,
) -> Result<StatusCode, AppError> {
    let updated = restaurant_repo::update(
        &state.db,
        restaurant_id,
        &form.name,
        &form.address,
        &form.phone_number,
        &form.opening_hours,
    )
    .await?;
    require(updated.is_some(), "restaurant")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, restaurant_id, "restaurant updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_restaurant(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(restaurant_id): Id,
) -> Result<StatusCode, AppError> {
    let found = restaurant_repo::delete(&state.db, restaurant_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, restaurant_id, "restaurant deleted");
    }
    deleted(found, "restaurant")
}

pub async fn total_revenue(
    State(state): State<AppState>,
    Id(restaurant_id): Id,
) -> Result<Json<Amount>, AppError> {
    let total = restaurant_repo::total_revenue(&state.db, restaurant_id).await?;
    Ok(Json(Amount(total)))
}
