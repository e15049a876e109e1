use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::entities::order;
use super::{JsonBody, Path};
use crate::error::{AppError, AppResult};
use crate::services::orders::{self as order_service, CreateOrder, UpdateOrder};
use crate::AppState;

const CREATE_FAILED: &str = "Erreur lors de la création de la commande";
const UPDATE_FAILED: &str = "Erreur lors de la mise à jour";
const STATUS_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du statut";
const DELETE_FAILED: &str = "Erreur lors de la suppression";

fn not_found() -> AppError {
    AppError::NotFound("Order not found".to_string())
}

/// List all orders
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<order::Model>>> {
    let orders = order_service::get_all_orders(&state.db).await?;
    Ok(Json(orders))
}

/// Get one order by id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<order::Model>> {
    order_service::get_order_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Get one order by its `ORD-...` number
pub async fn get_order_by_number(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> AppResult<Json<order::Model>> {
    order_service::get_order_by_order_number(&state.db, &order_number)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Orders of a user (empty list for unknown users)
pub async fn orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<order::Model>>> {
    let orders = order_service::get_orders_by_user(&state.db, user_id).await?;
    Ok(Json(orders))
}

/// Orders of a reservation (empty list for unknown reservations)
pub async fn orders_by_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> AppResult<Json<Vec<order::Model>>> {
    let orders = order_service::get_orders_by_reservation(&state.db, reservation_id).await?;
    Ok(Json(orders))
}

pub async fn orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<order::Model>>> {
    let orders = order_service::get_orders_by_status(&state.db, &status).await?;
    Ok(Json(orders))
}

/// Create an order
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateOrder>,
) -> AppResult<(StatusCode, Json<order::Model>)> {
    let order = order_service::create_order(&state.db, payload)
        .await
        .map_err(|e| e.or_failure(CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Update total amount and/or status of an order
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateOrder>,
) -> AppResult<Json<order::Model>> {
    order_service::update_order(&state.db, id, payload)
        .await
        .map_err(|e| e.or_failure(UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn update_order_status(
    State(state): State<AppState>,
    Path((id, status)): Path<(i32, String)>,
) -> AppResult<Json<order::Model>> {
    order_service::update_order_status(&state.db, id, &status)
        .await
        .map_err(|e| e.or_failure(STATUS_UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

/// Delete an order
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let deleted = order_service::delete_order(&state.db, id)
        .await
        .map_err(|e| e.or_failure(DELETE_FAILED))?;

    if !deleted {
        return Err(not_found());
    }

    Ok(Json(json!({ "message": "Commande supprimée avec succès" })))
}
