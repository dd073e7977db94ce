use axum::{
    extract::FromRequest,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, Result};

/// Encodes `value` with sonic-rs into a JSON response.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response> {
    let body = sonic_rs::to_string(value)
        .map_err(|e| AppError::Internal(format!("Response serialization failed: {}", e)))?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// An empty response with the given status.
pub fn empty_response(status: StatusCode) -> Response {
    status.into_response()
}

/// A JSON request body whose rejections (bad syntax, missing fields, wrong
/// content type) are answered as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
