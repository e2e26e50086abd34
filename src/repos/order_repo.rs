/*
 * Responsibility
 * - SQLx access for the orders table
 */
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub order_id: i32,
    pub reservation_id: i32,
    pub employee_id: i32,
    pub order_date: NaiveDateTime,
    pub total_amount: Decimal,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT order_id, reservation_id, employee_id, order_date, total_amount
        FROM orders
        ORDER BY order_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_reservation(db: &PgPool, reservation_id: i32) -> RepoResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT order_id, reservation_id, employee_id, order_date, total_amount
        FROM orders
        WHERE reservation_id = $1
        ORDER BY order_id
        "#,
    )
    .bind(reservation_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_employee(db: &PgPool, employee_id: i32) -> RepoResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT order_id, reservation_id, employee_id, order_date, total_amount
        FROM orders
        WHERE employee_id = $1
        ORDER BY order_id
        "#,
    )
    .bind(employee_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, order_id: i32) -> RepoResult<Option<OrderRow>> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT order_id, reservation_id, employee_id, order_date, total_amount
        FROM orders
        WHERE order_id = $1
        "#,
    )
    .bind(order_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, order_id: i32) -> RepoResult<bool> {
    let found =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM orders WHERE order_id = $1)")
            .bind(order_id)
            .fetch_one(db)
            .await?;

    Ok(found)
}

pub async fn create(
    db: &PgPool,
    reservation_id: i32,
    employee_id: i32,
    order_date: NaiveDateTime,
    total_amount: Decimal,
) -> RepoResult<OrderRow> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        INSERT INTO orders (reservation_id, employee_id, order_date, total_amount)
        VALUES ($1, $2, $3, $4)
        RETURNING order_id, reservation_id, employee_id, order_date, total_amount
        "#,
    )
    .bind(reservation_id)
    .bind(employee_id)
    .bind(order_date)
    .bind(total_amount)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    order_id: i32,
    reservation_id: i32,
    employee_id: i32,
    order_date: NaiveDateTime,
    total_amount: Decimal,
) -> RepoResult<Option<OrderRow>> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        UPDATE orders
        SET reservation_id = $2, employee_id = $3, order_date = $4, total_amount = $5
        WHERE order_id = $1
        RETURNING order_id, reservation_id, employee_id, order_date, total_amount
        "#,
    )
    .bind(order_id)
    .bind(reservation_id)
    .bind(employee_id)
    .bind(order_date)
    .bind(total_amount)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, order_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
        .bind(order_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
