/*
 * Responsibility
 * - SQLx access for the menu_items table
 */
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct MenuItemRow {
    pub menu_item_id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<MenuItemRow>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(
        r#"
        SELECT menu_item_id, restaurant_id, name, description, price
        FROM menu_items
        ORDER BY menu_item_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_restaurant(db: &PgPool, restaurant_id: i32) -> RepoResult<Vec<MenuItemRow>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(
        r#"
        SELECT menu_item_id, restaurant_id, name, description, price
        FROM menu_items
        WHERE restaurant_id = $1
        ORDER BY menu_item_id
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Distinct menu items ordered under the reservation.
pub async fn list_by_reservation(db: &PgPool, reservation_id: i32) -> RepoResult<Vec<MenuItemRow>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(
        r#"
        SELECT DISTINCT m.menu_item_id, m.restaurant_id, m.name, m.description, m.price
        FROM menu_items m
        JOIN order_items oi ON oi.menu_item_id = m.menu_item_id
        JOIN orders o ON o.order_id = oi.order_id
        WHERE o.reservation_id = $1
        ORDER BY m.menu_item_id
        "#,
    )
    .bind(reservation_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, menu_item_id: i32) -> RepoResult<Option<MenuItemRow>> {
    let row = sqlx::query_as::<_, MenuItemRow>(
        r#"
        SELECT menu_item_id, restaurant_id, name, description, price
        FROM menu_items
        WHERE menu_item_id = $1
        "#,
    )
    .bind(menu_item_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, menu_item_id: i32) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM menu_items WHERE menu_item_id = $1)",
    )
    .bind(menu_item_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}

pub async fn create(
    db: &PgPool,
    restaurant_id: i32,
    name: &str,
    description: &str,
    price: Decimal,
) -> RepoResult<MenuItemRow> {
    let row = sqlx::query_as::<_, MenuItemRow>(
        r#"
        INSERT INTO menu_items (restaurant_id, name, description, price)
        VALUES ($1, $2, $3, $4)
        RETURNING menu_item_id, restaurant_id, name, description, price
        "#,
    )
    .bind(restaurant_id)
    .bind(name)
    .bind(description)
    .bind(price)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    menu_item_id: i32,
    restaurant_id: i32,
    name: &str,
    description: &str,
    price: Decimal,
) -> RepoResult<Option<MenuItemRow>> {
    let row = sqlx::query_as::<_, MenuItemRow>(
        r#"
        UPDATE menu_items
        SET restaurant_id = $2, name = $3, description = $4, price = $5
        WHERE menu_item_id = $1
        RETURNING menu_item_id, restaurant_id, name, description, price
        "#,
    )
    .bind(menu_item_id)
    .bind(restaurant_id)
    .bind(name)
    .bind(description)
    .bind(price)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, menu_item_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM menu_items WHERE menu_item_id = $1")
        .bind(menu_item_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
