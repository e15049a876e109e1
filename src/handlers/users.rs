use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::entities::user;
use super::{JsonBody, Path};
use crate::error::{AppError, AppResult};
use crate::services::users::{self as user_service, CreateUser, Credentials, UpdateUser};
use crate::AppState;

const CREATE_FAILED: &str = "Erreur lors de la création de l'utilisateur";
const UPDATE_FAILED: &str = "Erreur lors de la mise à jour";
const DELETE_FAILED: &str = "Erreur lors de la suppression";
const LOGIN_FAILED: &str = "Erreur lors de la connexion";

fn not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<user::Model>>> {
    let users = user_service::get_all_users(&state.db).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<user::Model>> {
    user_service::get_user_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<user::Model>> {
    user_service::get_user_by_email(&state.db, &email)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Register a user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<user::Model>)> {
    let user = user_service::create_user(&state.db, payload)
        .await
        .map_err(|e| e.or_failure(CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Check credentials and return the matching user
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Credentials>,
) -> AppResult<Json<user::Model>> {
    let user = user_service::authenticate(&state.db, payload)
        .await
        .map_err(|e| e.or_failure(LOGIN_FAILED))?;

    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateUser>,
) -> AppResult<Json<user::Model>> {
    user_service::update_user(&state.db, id, payload)
        .await
        .map_err(|e| e.or_failure(UPDATE_FAILED))?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let deleted = user_service::delete_user(&state.db, id)
        .await
        .map_err(|e| e.or_failure(DELETE_FAILED))?;

    if !deleted {
        return Err(not_found());
    }

    Ok(Json(json!({ "message": "Utilisateur supprimé avec succès" })))
}
