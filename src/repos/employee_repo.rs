/*
 * Responsibility
 * - SQLx access for the employees table and the employees_with_restaurant_details view
 * - Average order amount is computed in the database
 */
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

pub const MANAGER_POSITION: &str = "Manager";

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub employee_id: i32,
    pub restaurant_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeWithRestaurantRow {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub restaurant_id: i32,
    pub restaurant_name: String,
    pub address: String,
    pub phone_number: String,
    pub opening_hours: String,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<EmployeeRow>> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT employee_id, restaurant_id, first_name, last_name, position
        FROM employees
        ORDER BY employee_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_with_restaurant_details(
    db: &PgPool,
) -> RepoResult<Vec<EmployeeWithRestaurantRow>> {
    let rows = sqlx::query_as::<_, EmployeeWithRestaurantRow>(
        r#"
        SELECT employee_id, first_name, last_name, position,
               restaurant_id, restaurant_name, address, phone_number, opening_hours
        FROM employees_with_restaurant_details
        ORDER BY employee_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_position(db: &PgPool, position: &str) -> RepoResult<Vec<EmployeeRow>> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT employee_id, restaurant_id, first_name, last_name, position
        FROM employees
        WHERE position = $1
        ORDER BY employee_id
        "#,
    )
    .bind(position)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_by_restaurant(db: &PgPool, restaurant_id: i32) -> RepoResult<Vec<EmployeeRow>> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT employee_id, restaurant_id, first_name, last_name, position
        FROM employees
        WHERE restaurant_id = $1
        ORDER BY employee_id
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, employee_id: i32) -> RepoResult<Option<EmployeeRow>> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT employee_id, restaurant_id, first_name, last_name, position
        FROM employees
        WHERE employee_id = $1
        "#,
    )
    .bind(employee_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, employee_id: i32) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM employees WHERE employee_id = $1)",
    )
    .bind(employee_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}

pub async fn create(
    db: &PgPool,
    restaurant_id: i32,
    first_name: &str,
    last_name: &str,
    position: &str,
) -> RepoResult<EmployeeRow> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        INSERT INTO employees (restaurant_id, first_name, last_name, position)
        VALUES ($1, $2, $3, $4)
        RETURNING employee_id, restaurant_id, first_name, last_name, position
        "#,
    )
    .bind(restaurant_id)
    .bind(first_name)
    .bind(last_name)
    .bind(position)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    employee_id: i32,
    restaurant_id: i32,
    first_name: &str,
    last_name: &str,
    position: &str,
) -> RepoResult<Option<EmployeeRow>> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        UPDATE employees
        SET restaurant_id = $2, first_name = $3, last_name = $4, position = $5
        WHERE employee_id = $1
        RETURNING employee_id, restaurant_id, first_name, last_name, position
        "#,
    )
    .bind(employee_id)
    .bind(restaurant_id)
    .bind(first_name)
    .bind(last_name)
    .bind(position)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, employee_id: i32) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
        .bind(employee_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Mean `total_amount` of the employee's orders rounded to cents; zero when they have none.
pub async fn average_order_amount(db: &PgPool, employee_id: i32) -> RepoResult<Decimal> {
    let average = sqlx::query_scalar::<_, Decimal>(
        r#"
        SELECT ROUND(COALESCE(AVG(total_amount), 0), 2)
        FROM orders
        WHERE employee_id = $1
        "#,
    )
    .bind(employee_id)
    .fetch_one(db)
    .await?;

    Ok(average)
}
