/*
 * Responsibility
 * - /reservations CRUD
 * - ?withExtraInfo=true, /reservations/customer/{customerId},
 *   /reservations/{id}/orders, /reservations/{id}/menu-items
 */
use std::collections::BTreeMap;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::IncludeListsQuery;
use crate::api::dto::menu_items::MenuItemResponse;
use crate::api::dto::orders::{OrderLineResponse, OrderResponse, OrderWithItemsResponse};
use crate::api::dto::reservations::{
    ReservationForm, ReservationListQuery, ReservationResponse, ReservationWithDetailsResponse,
    ReservationWithListsResponse,
};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::order_item_repo::OrderItemWithMenuItemRow;
use crate::repos::order_repo::OrderRow;
use crate::repos::{
    customer_repo, menu_item_repo, order_item_repo, order_repo, reservation_repo,
    restaurant_repo, table_repo,
};
use crate::state::AppState;

pub async fn list_reservations(
    State(state): State<AppState>,
    Params(query): Params<ReservationListQuery>,
) -> Result<Response, AppError> {
    if query.with_extra_info {
        let rows = reservation_repo::list_with_details(&state.db).await?;
        let body: Vec<ReservationWithDetailsResponse> = rows.into_iter().map(Into::into).collect();
        return Ok(Json(body).into_response());
    }

    let rows = reservation_repo::list(&state.db).await?;
    let body: Vec<ReservationResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

pub async fn list_for_customer(
    State(state): State<AppState>,
    Id(customer_id): Id,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    require(customer_repo::exists(&state.db, customer_id).await?, "customer")?;

    let rows = reservation_repo::list_by_customer(&state.db, customer_id).await?;
    Ok(Json(rows.into_iter().map(ReservationResponse::from).collect()))
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Id(reservation_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = reservation_repo::get(&state.db, reservation_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let reservation = ReservationResponse::from(row);

    if !query.include_lists {
        return Ok(Json(reservation).into_response());
    }

    let orders = order_repo::list_by_reservation(&state.db, reservation_id).await?;
    Ok(Json(ReservationWithListsResponse {
        reservation,
        orders: orders.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

/// Orders of a reservation, each with its lines and their menu items.
/// An unknown reservation simply has no orders.
pub async fn list_orders(
    State(state): State<AppState>,
    Id(reservation_id): Id,
) -> Result<Json<Vec<OrderWithItemsResponse>>, AppError> {
    let orders = order_repo::list_by_reservation(&state.db, reservation_id).await?;
    let lines =
        order_item_repo::list_with_menu_items_by_reservation(&state.db, reservation_id).await?;

    Ok(Json(group_lines(orders, lines)))
}

fn group_lines(
    orders: Vec<OrderRow>,
    lines: Vec<OrderItemWithMenuItemRow>,
) -> Vec<OrderWithItemsResponse> {
    let mut by_order: BTreeMap<i32, Vec<OrderLineResponse>> = BTreeMap::new();
    for line in lines {
        by_order.entry(line.order_id).or_default().push(OrderLineResponse {
            order_item_id: line.order_item_id,
            order_id: line.order_id,
            quantity: line.quantity,
            menu_item: MenuItemResponse {
                menu_item_id: line.menu_item_id,
                restaurant_id: line.restaurant_id,
                name: line.name,
                description: line.description,
                price: line.price,
            },
        });
    }

    orders
        .into_iter()
        .map(|order| OrderWithItemsResponse {
            order_items: by_order.remove(&order.order_id).unwrap_or_default(),
            order: OrderResponse::from(order),
        })
        .collect()
}

/// Distinct menu items ordered under a reservation (empty when unknown).
pub async fn list_menu_items(
    State(state): State<AppState>,
    Id(reservation_id): Id,
) -> Result<Json<Vec<MenuItemResponse>>, AppError> {
    let rows = menu_item_repo::list_by_reservation(&state.db, reservation_id).await?;
    Ok(Json(rows.into_iter().map(MenuItemResponse::from).collect()))
}

async fn require_references(state: &AppState, form: &ReservationForm) -> Result<(), AppError> {
    let db = &state.db;
    let (customer, restaurant, table) = tokio::try_join!(
        customer_repo::exists(db, form.customer_id),
        restaurant_repo::exists(db, form.restaurant_id),
        table_repo::exists(db, form.table_id),
    )?;

    require(customer, "customer")?;
    require(restaurant, "restaurant")?;
    require(table, "table")
}

pub async fn create_reservation(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<ReservationForm>,
) -> Result<Response, AppError> {
    require_references(&state, &form).await?;
    // validated above: the date is present
    let reservation_date = form.reservation_date.ok_or(AppError::Internal)?;

    let row = reservation_repo::create(
        &state.db,
        form.customer_id,
        form.restaurant_id,
        form.table_id,
        reservation_date,
        form.party_size,
    )
    .await?;

    tracing::info!(
        actor = ctx.employee_id,
        actor_name = %ctx,
        reservation_id = row.reservation_id,
        "reservation created"
    );
    Ok(created(
        format!("/api/reservations/{}", row.reservation_id),
        ReservationResponse::from(row),
    ))
}

pub async fn update_reservation(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(reservation_id): Id,
    Validated(form): Validated<ReservationForm>,
) -> Result<StatusCode, AppError> {
    require_references(&state, &form).await?;
    let reservation_date = form.reservation_date.ok_or(AppError::Internal)?;

    let updated = reservation_repo::update(
        &state.db,
        reservation_id,
        form.customer_id,
        form.restaurant_id,
        form.table_id,
        reservation_date,
        form.party_size,
    )
    .await?;
    require(updated.is_some(), "reservation")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, reservation_id, "reservation updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(reservation_id): Id,
) -> Result<StatusCode, AppError> {
    let found = reservation_repo::delete(&state.db, reservation_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, reservation_id, "reservation deleted");
    }
    deleted(found, "reservation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn order(order_id: i32) -> OrderRow {
        OrderRow {
            order_id,
            reservation_id: 1,
            employee_id: 1,
            order_date: NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .unwrap(),
            total_amount: Decimal::new(1000, 2),
        }
    }

    fn line(order_item_id: i32, order_id: i32) -> OrderItemWithMenuItemRow {
        OrderItemWithMenuItemRow {
            order_item_id,
            order_id,
            quantity: 1,
            menu_item_id: 9,
            restaurant_id: 1,
            name: "Soup".into(),
            description: "Soup of the day".into(),
            price: Decimal::new(500, 2),
        }
    }

    #[test]
    fn reservation_without_orders_groups_to_empty() {
        assert!(group_lines(Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn lines_are_grouped_under_their_order() {
        let grouped = group_lines(vec![order(1), order(2), order(3)], vec![
            line(10, 1),
            line(11, 1),
            line(12, 3),
        ]);

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].order_items.len(), 2);
        assert!(grouped[1].order_items.is_empty());
        assert_eq!(grouped[2].order_items[0].order_item_id, 12);
        assert_eq!(grouped[2].order_items[0].menu_item.name, "Soup");
    }
}
