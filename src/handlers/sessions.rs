use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    error::Result,
    handlers::json::{empty_response, json_response, JsonBody},
    models::session::Session,
    services::sessions as session_service,
    state::AppState,
    validation::auth::parse_id,
};

/// Lists all sessions.
#[axum::debug_handler]
pub async fn find_all(State(state): State<AppState>) -> Result<Response> {
    let sessions = session_service::list_sessions(&state.db).await;
    json_response(StatusCode::OK, &sessions)
}

/// Gets one session.
#[axum::debug_handler]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let session = session_service::get_session(&state.db, parse_id(&id)?).await?;
    json_response(StatusCode::OK, &session)
}

/// Creates a session.
#[axum::debug_handler]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Session>,
) -> Result<Response> {
    tracing::debug!("📝 Create session: {:?}", payload);
    let session = session_service::create_session(&state.db, payload).await?;
    json_response(StatusCode::CREATED, &session)
}

/// Updates a session.
#[axum::debug_handler]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Session>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    tracing::debug!("📝 Update session {}: {:?}", id, payload);
    let session = session_service::update_session(&state.db, id, payload).await?;
    json_response(StatusCode::OK, &session)
}

/// Deletes a session.
#[axum::debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    session_service::delete_session(&state.db, parse_id(&id)?).await?;
    Ok(empty_response(StatusCode::OK))
}

/// Adds a user to a session's participants.
#[axum::debug_handler]
pub async fn participate(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<Response> {
    session_service::participate(&state.db, parse_id(&id)?, parse_id(&user_id)?).await?;
    Ok(empty_response(StatusCode::OK))
}

/// Removes a user from a session's participants.
#[axum::debug_handler]
pub async fn no_longer_participate(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<Response> {
    session_service::no_longer_participate(&state.db, parse_id(&id)?, parse_id(&user_id)?)
        .await?;
    Ok(empty_response(StatusCode::OK))
}
