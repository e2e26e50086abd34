/*
 * Responsibility
 * - SQLx access for the reservations table and the
 *   reservations_with_customer_and_restaurant view
 */
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    pub reservation_id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub table_id: i32,
    pub reservation_date: NaiveDateTime,
    pub party_size: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct ReservationDetailsRow {
    pub reservation_id: i32,
    pub reservation_date: NaiveDateTime,
    pub party_size: i32,
    pub customer_id: i32,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub restaurant_id: i32,
    pub restaurant_name: String,
}

/// Column list shared by the reservation write/read queries.
const COLUMNS: &str = "reservation_id, customer_id, restaurant_id, table_id, reservation_date, party_size";

pub async fn list(db: &PgPool) -> RepoResult<Vec<ReservationRow>> {
    let sql = format!("SELECT {COLUMNS} FROM reservations ORDER BY reservation_id");
    let rows = sqlx::query_as::<_, ReservationRow>(&sql)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn list_with_details(db: &PgPool) -> RepoResult<Vec<ReservationDetailsRow>> {
    let rows = sqlx::query_as::<_, ReservationDetailsRow>(
        r#"
        SELECT reservation_id, reservation_date, party_size,
               customer_id, customer_first_name, customer_last_name,
               restaurant_id, restaurant_name
        FROM reservations_with_customer_and_restaurant
        ORDER BY reservation_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_customer(db: &PgPool, customer_id: i32) -> RepoResult<Vec<ReservationRow>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM reservations WHERE customer_id = $1 ORDER BY reservation_id"
    );
    let rows = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(customer_id)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn list_by_restaurant(
    db: &PgPool,
    restaurant_id: i32,
) -> RepoResult<Vec<ReservationRow>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM reservations WHERE restaurant_id = $1 ORDER BY reservation_id"
    );
    let rows = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(restaurant_id)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn list_by_table(db: &PgPool, table_id: i32) -> RepoResult<Vec<ReservationRow>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM reservations WHERE table_id = $1 ORDER BY reservation_id"
    );
    let rows = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(table_id)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, reservation_id: i32) -> RepoResult<Option<ReservationRow>> {
    let sql = format!("SELECT {COLUMNS} FROM reservations WHERE reservation_id = $1");
    let row = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(reservation_id)
        .fetch_optional(db)
        .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, reservation_id: i32) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM reservations WHERE reservation_id = $1)",
    )
    .bind(reservation_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}

pub async fn create(
    db: &PgPool,
    customer_id: i32,
    restaurant_id: i32,
    table_id: i32,
    reservation_date: NaiveDateTime,
    party_size: i32,
) -> RepoResult<ReservationRow> {
    let sql = format!(
        r#"
        INSERT INTO reservations (customer_id, restaurant_id, table_id, reservation_date, party_size)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(customer_id)
        .bind(restaurant_id)
        .bind(table_id)
        .bind(reservation_date)
        .bind(party_size)
        .fetch_one(db)
        .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    reservation_id: i32,
    customer_id: i32,
    restaurant_id: i32,
    table_id: i32,
    reservation_date: NaiveDateTime,
    party_size: i32,
) -> RepoResult<Option<ReservationRow>> {
    let sql = format!(
        r#"
        UPDATE reservations
        SET customer_id = $2, restaurant_id = $3, table_id = $4,
            reservation_date = $5, party_size = $6
        WHERE reservation_id = $1
        RETURNING {COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(reservation_id)
        .bind(customer_id)
        .bind(restaurant_id)
        .bind(table_id)
        .bind(reservation_date)
        .bind(party_size)
        .fetch_optional(db)
        .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, reservation_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM reservations WHERE reservation_id = $1")
        .bind(reservation_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
