use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::IncludeListsQuery;
use crate::api::dto::tables::{TableForm, TableResponse, TableWithListsResponse};
use crate::api::extractors::{AuthCtxExtractor, Id, Params, Validated};
use crate::api::handlers::{created, deleted, require};
use crate::error::AppError;
use crate::repos::{reservation_repo, restaurant_repo, table_repo};
use crate::state::AppState;

pub async fn list_tables(
    State(state): State<AppState>,
) -> Result<Json<Vec<TableResponse>>, AppError> {
    let rows = table_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(TableResponse::from).collect()))
}

pub async fn get_table(
    State(state): State<AppState>,
    Id(table_id): Id,
    Params(query): Params<IncludeListsQuery>,
) -> Result<Response, AppError> {
    let row = table_repo::get(&state.db, table_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let table = TableResponse::from(row);

    if !query.include_lists {
        return Ok(Json(table).into_response());
    }

    let reservations = reservation_repo::list_by_table(&state.db, table_id).await?;
    Ok(Json(TableWithListsResponse {
        table,
        reservations: reservations.into_iter().map(Into::into).collect(),
    })
    .into_response())
}

pub async fn create_table(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Validated(form): Validated<TableForm>,
) -> Result<Response, AppError> {
    require(
        restaurant_repo::exists(&state.db, form.restaurant_id).await?,
        "restaurant",
    )?;

    let row = table_repo::create(&state.db, form.restaurant_id, form.capacity).await?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, table_id = row.table_id, "table created");
    Ok(created(
        format!("/api/tables/{}", row.table_id),
        TableResponse::from(row),
    ))
}

pub async fn update_table(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(table_id): Id,
    Validated(form): Validated<TableForm>,
) -> Result<StatusCode, AppError> {
    require(
        restaurant_repo::exists(&state.db, form.restaurant_id).await?,
        "restaurant",
    )?;

    let updated = table_repo::update(&state.db, table_id, form.restaurant_id, form.capacity).await?;
    require(updated.is_some(), "table")?;

    tracing::info!(actor = ctx.employee_id, actor_name = %ctx, table_id, "table updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_table(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Id(table_id): Id,
) -> Result<StatusCode, AppError> {
    let found = table_repo::delete(&state.db, table_id).await?;
    if found {
        tracing::info!(actor = ctx.employee_id, actor_name = %ctx, table_id, "table deleted");
    }
    deleted(found, "table")
}
