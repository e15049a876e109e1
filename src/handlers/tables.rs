use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::entities::restaurant_table;
use super::{JsonBody, Path};
use crate::error::{AppError, AppResult};
use crate::services::restaurant_tables::{self as table_service, CreateTable, UpdateTable};
use crate::AppState;

const CREATE_FAILED: &str = "Erreur lors de la création de la table";
const UPDATE_FAILED: &str = "Erreur lors de la mise à jour";
const STATUS_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du statut";
const DELETE_FAILED: &str = "Erreur lors de la suppression";

fn not_found() -> AppError {
    AppError::NotFound("Table not found".to_string())
}

/// List all tables
pub async fn list_tables(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<restaurant_table::Model>>> {
    let tables = table_service::get_all_tables(&state.db).await?;
    Ok(Json(tables))
}

/// List tables currently marked available
pub async fn available_tables(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<restaurant_table::Model>>> {
    let tables = table_service::get_available_tables(&state.db).await?;
    Ok(Json(tables))
}

pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<restaurant_table::Model>> {
    table_service::get_table_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn get_table_by_number(
    State(state): State<AppState>,
    Path(table_number): Path<String>,
) -> AppResult<Json<restaurant_table::Model>> {
    table_service::get_table_by_number(&state.db, &table_number)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn tables_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<restaurant_table::Model>>> {
    let tables = table_service::get_tables_by_status(&state.db, &status).await?;
    Ok(Json(tables))
}

/// Tables with at least the given number of seats
pub async fn tables_by_capacity(
    State(state): State<AppState>,
    Path(min_capacity): Path<i32>,
) -> AppResult<Json<Vec<restaurant_table::Model>>> {
    let tables = table_service::get_tables_by_min_capacity(&state.db, min_capacity).await?;
    Ok(Json(tables))
}

pub async fn create_table(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTable>,
) -> AppResult<(StatusCode, Json<restaurant_table::Model>)> {
    let table = table_service::create_table(&state.db, payload)
        .await
        .map_err(|e| e.or_failure(CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(table)))
}

pub async fn update_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateTable>,
) -> AppResult<Json<restaurant_table::Model>> {
    table_service::update_table(&state.db, id, payload)
        .await
        .map_err(|e| e.or_failure(UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn update_table_status(
    State(state): State<AppState>,
    Path((id, status)): Path<(i32, String)>,
) -> AppResult<Json<restaurant_table::Model>> {
    table_service::update_table_status(&state.db, id, &status)
        .await
        .map_err(|e| e.or_failure(STATUS_UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let deleted = table_service::delete_table(&state.db, id)
        .await
        .map_err(|e| e.or_failure(DELETE_FAILED))?;

    if !deleted {
        return Err(not_found());
    }

    Ok(Json(json!({ "message": "Table supprimée avec succès" })))
}
