use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

pub mod orders;
pub mod reservations;
pub mod tables;
pub mod users;

/// `axum::extract::Path` answering malformed segments with a JSON 400
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// `axum::Json` request body answering malformed payloads with a JSON 400
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
