/*
 * Responsibility
 * - SQLx access for the tables table
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct TableRow {
    pub table_id: i32,
    pub restaurant_id: i32,
    pub capacity: i32,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<TableRow>> {
    let rows = sqlx::query_as::<_, TableRow>(
        "SELECT table_id, restaurant_id, capacity FROM tables ORDER BY table_id",
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_restaurant(db: &PgPool, restaurant_id: i32) -> RepoResult<Vec<TableRow>> {
    let rows = sqlx::query_as::<_, TableRow>(
        r#"
        SELECT table_id, restaurant_id, capacity
        FROM tables
        WHERE restaurant_id = $1
        ORDER BY table_id
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, table_id: i32) -> RepoResult<Option<TableRow>> {
    let row = sqlx::query_as::<_, TableRow>(
        "SELECT table_id, restaurant_id, capacity FROM tables WHERE table_id = $1",
    )
    .bind(table_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, table_id: i32) -> RepoResult<bool> {
    let found =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM tables WHERE table_id = $1)")
            .bind(table_id)
            .fetch_one(db)
            .await?;

    Ok(found)
}

pub async fn create(db: &PgPool, restaurant_id: i32, capacity: i32) -> RepoResult<TableRow> {
    let row = sqlx::query_as::<_, TableRow>(
        r#"
        INSERT INTO tables (restaurant_id, capacity)
        VALUES ($1, $2)
        RETURNING table_id, restaurant_id, capacity
        "#,
    )
    .bind(restaurant_id)
    .bind(capacity)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    table_id: i32,
    restaurant_id: i32,
    capacity: i32,
) -> RepoResult<Option<TableRow>> {
    let row = sqlx::query_as::<_, TableRow>(
        r#"
        UPDATE tables
        SET restaurant_id = $2, capacity = $3
        WHERE table_id = $1
        RETURNING table_id, restaurant_id, capacity
        "#,
    )
    .bind(table_id)
    .bind(restaurant_id)
    .bind(capacity)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, table_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM tables WHERE table_id = $1")
        .bind(table_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
