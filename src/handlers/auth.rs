use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};

use crate::{
    error::Result,
    handlers::json::{empty_response, json_response, JsonBody},
    models::auth::{LoginRequest, RegisterRequest},
    services::auth as auth_service,
    state::AppState,
    validation::auth::validate_payload,
};

/// Handles user registration.
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<Response> {
    tracing::info!("📝 Register attempt - Payload: {:?}", payload);
    validate_payload(&payload)?;

    let user = auth_service::register_user(&state.db, &payload).await?;
    tracing::info!("✅ User registered: {}", user.id);

    Ok(empty_response(StatusCode::CREATED))
}

/// Handles user login.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Login attempt - Payload: {:?}", payload);
    validate_payload(&payload)?;

    let identity =
        auth_service::authenticate_user(&state.db, &payload, state.config.token_ttl_hours).await?;

    json_response(StatusCode::OK, &identity)
}
