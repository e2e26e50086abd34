/*
 * Responsibility
 * - SQLx access for the order_items table
 * - Items joined with their menu item, for the per-reservation order listing
 */
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
    pub order_item_id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItemWithMenuItemRow {
    pub order_item_id: i32,
    pub order_id: i32,
    pub quantity: i32,
    pub menu_item_id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<OrderItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT order_item_id, order_id, menu_item_id, quantity
        FROM order_items
        ORDER BY order_item_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_order(db: &PgPool, order_id: i32) -> RepoResult<Vec<OrderItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT order_item_id, order_id, menu_item_id, quantity
        FROM order_items
        WHERE order_id = $1
        ORDER BY order_item_id
        "#,
    )
    .bind(order_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_menu_item(db: &PgPool, menu_item_id: i32) -> RepoResult<Vec<OrderItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT order_item_id, order_id, menu_item_id, quantity
        FROM order_items
        WHERE menu_item_id = $1
        ORDER BY order_item_id
        "#,
    )
    .bind(menu_item_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_with_menu_items_by_reservation(
    db: &PgPool,
    reservation_id: i32,
) -> RepoResult<Vec<OrderItemWithMenuItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemWithMenuItemRow>(
        r#"
        SELECT oi.order_item_id, oi.order_id, oi.quantity,
               m.menu_item_id, m.restaurant_id, m.name, m.description, m.price
        FROM order_items oi
        JOIN orders o ON o.order_id = oi.order_id
        JOIN menu_items m ON m.menu_item_id = oi.menu_item_id
        WHERE o.reservation_id = $1
        ORDER BY oi.order_id, oi.order_item_id
        "#,
    )
    .bind(reservation_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, order_item_id: i32) -> RepoResult<Option<OrderItemRow>> {
    let row = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT order_item_id, order_id, menu_item_id, quantity
        FROM order_items
        WHERE order_item_id = $1
        "#,
    )
    .bind(order_item_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    order_id: i32,
    menu_item_id: i32,
    quantity: i32,
) -> RepoResult<OrderItemRow> {
    let row = sqlx::query_as::<_, OrderItemRow>(
        r#"
        INSERT INTO order_items (order_id, menu_item_id, quantity)
        VALUES ($1, $2, $3)
        RETURNING order_item_id, order_id, menu_item_id, quantity
        "#,
    )
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    order_item_id: i32,
    order_id: i32,
    menu_item_id: i32,
    quantity: i32,
) -> RepoResult<Option<OrderItemRow>> {
    let row = sqlx::query_as::<_, OrderItemRow>(
        r#"
        UPDATE order_items
        SET order_id = $2, menu_item_id = $3, quantity = $4
        WHERE order_item_id = $1
        RETURNING order_item_id, order_id, menu_item_id, quantity
        "#,
    )
    .bind(order_item_id)
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, order_item_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM order_items WHERE order_item_id = $1")
        .bind(order_item_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
