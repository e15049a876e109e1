use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::entities::reservation;
use super::{JsonBody, Path};
use crate::error::{AppError, AppResult};
use crate::services::reservations::{
    self as reservation_service, CreateReservation, UpdateReservation,
};
use crate::AppState;

const CREATE_FAILED: &str = "Erreur lors de la création de la réservation";
const UPDATE_FAILED: &str = "Erreur lors de la mise à jour";
const STATUS_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du statut";
const DELETE_FAILED: &str = "Erreur lors de la suppression";

fn not_found() -> AppError {
    AppError::NotFound("Reservation not found".to_string())
}

/// List all reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<reservation::Model>>> {
    let reservations = reservation_service::get_all_reservations(&state.db).await?;
    Ok(Json(reservations))
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<reservation::Model>> {
    reservation_service::get_reservation_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Reservations of a user (empty list for unknown users)
pub async fn reservations_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<reservation::Model>>> {
    let reservations = reservation_service::get_reservations_by_user(&state.db, user_id).await?;
    Ok(Json(reservations))
}

/// Reservations of a table (empty list for unknown tables)
pub async fn reservations_by_table(
    State(state): State<AppState>,
    Path(table_id): Path<i32>,
) -> AppResult<Json<Vec<reservation::Model>>> {
    let reservations = reservation_service::get_reservations_by_table(&state.db, table_id).await?;
    Ok(Json(reservations))
}

pub async fn reservations_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<reservation::Model>>> {
    let reservations = reservation_service::get_reservations_by_status(&state.db, &status).await?;
    Ok(Json(reservations))
}

/// Reservations on a given day (`YYYY-MM-DD`)
pub async fn reservations_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<Vec<reservation::Model>>> {
    let reservations = reservation_service::get_reservations_by_date(&state.db, date).await?;
    Ok(Json(reservations))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateReservation>,
) -> AppResult<(StatusCode, Json<reservation::Model>)> {
    let reservation = reservation_service::create_reservation(&state.db, payload)
        .await
        .map_err(|e| e.or_failure(CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateReservation>,
) -> AppResult<Json<reservation::Model>> {
    reservation_service::update_reservation(&state.db, id, payload)
        .await
        .map_err(|e| e.or_failure(UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn update_reservation_status(
    State(state): State<AppState>,
    Path((id, status)): Path<(i32, String)>,
) -> AppResult<Json<reservation::Model>> {
    reservation_service::update_reservation_status(&state.db, id, &status)
        .await
        .map_err(|e| e.or_failure(STATUS_UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let deleted = reservation_service::delete_reservation(&state.db, id)
        .await
        .map_err(|e| e.or_failure(DELETE_FAILED))?;

    if !deleted {
        return Err(not_found());
    }

    Ok(Json(json!({ "message": "Réservation supprimée avec succès" })))
}
