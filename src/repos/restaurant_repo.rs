/*
 * Responsibility
 * - SQLx access for the restaurants table
 * - Revenue aggregate is computed in the database
 */
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct RestaurantRow {
    pub restaurant_id: i32,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub opening_hours: String,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<RestaurantRow>> {
    let rows = sqlx::query_as::<_, RestaurantRow>(
        r#"
        SELECT restaurant_id, name, address, phone_number, opening_hours
        FROM restaurants
        ORDER BY restaurant_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, restaurant_id: i32) -> RepoResult<Option<RestaurantRow>> {
    let row = sqlx::query_as::<_, RestaurantRow>(
        r#"
        SELECT restaurant_id, name, address, phone_number, opening_hours
        FROM restaurants
        WHERE restaurant_id = $1
        "#,
    )
    .bind(restaurant_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, restaurant_id: i32) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM restaurants WHERE restaurant_id = $1)",
    )
    .bind(restaurant_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    address: &str,
    phone_number: &str,
    opening_hours: &str,
) -> RepoResult<RestaurantRow> {
    let row = sqlx::query_as::<_, RestaurantRow>(
        r#"
        INSERT INTO restaurants (name, address, phone_number, opening_hours)
        VALUES ($1, $2, $3, $4)
        RETURNING restaurant_id, name, address, phone_number, opening_hours
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(phone_number)
    .bind(opening_hours)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    restaurant_id: i32,
    name: &str,
    address: &str,
    phone_number: &str,
    opening_hours: &str,
) -> RepoResult<Option<RestaurantRow>> {
    let row = sqlx::query_as::<_, RestaurantRow>(
        r#"
        UPDATE restaurants
        SET name = $2, address = $3, phone_number = $4, opening_hours = $5
        WHERE restaurant_id = $1
        RETURNING restaurant_id, name, address, phone_number, opening_hours
        "#,
    )
    .bind(restaurant_id)
    .bind(name)
    .bind(address)
    .bind(phone_number)
    .bind(opening_hours)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, restaurant_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM restaurants WHERE restaurant_id = $1")
        .bind(restaurant_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Sum of order totals over every reservation at the restaurant; zero when none.
pub async fn total_revenue(db: &PgPool, restaurant_id: i32) -> RepoResult<Decimal> {
    let total = sqlx::query_scalar::<_, Decimal>(
        r#"
        SELECT COALESCE(SUM(o.total_amount), 0)
        FROM orders o
        JOIN reservations r ON r.reservation_id = o.reservation_id
        WHERE r.restaurant_id = $1
        "#,
    )
    .bind(restaurant_id)
    .fetch_one(db)
    .await?;

    Ok(total)
}
