/*
 * Responsibility
 * - SQLx access for the customers table
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<CustomerRow>> {
    let rows = sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT customer_id, first_name, last_name, email, phone_number
        FROM customers
        ORDER BY customer_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Customers holding at least one reservation with more than `party_size` guests.
pub async fn list_with_party_size_greater_than(
    db: &PgPool,
    party_size: i32,
) -> RepoResult<Vec<CustomerRow>> {
    let rows = sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT c.customer_id, c.first_name, c.last_name, c.email, c.phone_number
        FROM customers c
        WHERE EXISTS (
            SELECT 1 FROM reservations r
            WHERE r.customer_id = c.customer_id AND r.party_size > $1
        )
        ORDER BY c.customer_id
        "#,
    )
    .bind(party_size)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, customer_id: i32) -> RepoResult<Option<CustomerRow>> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT customer_id, first_name, last_name, email, phone_number
        FROM customers
        WHERE customer_id = $1
        "#,
    )
    .bind(customer_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, customer_id: i32) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM customers WHERE customer_id = $1)",
    )
    .bind(customer_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}

pub async fn create(
    db: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
) -> RepoResult<CustomerRow> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r#"
        INSERT INTO customers (first_name, last_name, email, phone_number)
        VALUES ($1, $2, $3, $4)
        RETURNING customer_id, first_name, last_name, email, phone_number
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone_number)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    customer_id: i32,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
) -> RepoResult<Option<CustomerRow>> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r#"
        UPDATE customers
        SET first_name = $2, last_name = $3, email = $4, phone_number = $5
        WHERE customer_id = $1
        RETURNING customer_id, first_name, last_name, email, phone_number
        "#,
    )
    .bind(customer_id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone_number)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, customer_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
        .bind(customer_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
