/*
 * Responsibility
 * - Thin handlers: extract -> repo call -> response shape
 * - Shared response helpers
 */
pub mod authentication;
pub mod customers;
pub mod employees;
pub mod health;
pub mod menu_items;
pub mod order_items;
pub mod orders;
pub mod reservations;
pub mod restaurants;
pub mod tables;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// 404 unless `found`. Used for both the entity itself and the entities it references.
fn require(found: bool, entity: &'static str) -> Result<(), AppError> {
    if found {
        Ok(())
    } else {
        tracing::debug!(entity, "entity not found");
        Err(AppError::NotFound)
    }
}

/// 201 with a `Location` header pointing at the new resource.
fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

fn deleted(found: bool, entity: &'static str) -> Result<StatusCode, AppError> {
    require(found, entity)?;
    Ok(StatusCode::NO_CONTENT)
}
