use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension,
};

use crate::{
    error::Result,
    handlers::json::{empty_response, json_response},
    models::token::AuthUser,
    services::users as user_service,
    state::AppState,
    validation::auth::parse_id,
};

/// Gets a user profile. The password is never included.
#[axum::debug_handler]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let user = user_service::get_user(&state.db, parse_id(&id)?).await?;
    json_response(StatusCode::OK, &user)
}

/// Deletes the caller's own account.
#[axum::debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Response> {
    user_service::delete_user(&state.db, caller.user_id, parse_id(&id)?).await?;
    Ok(empty_response(StatusCode::OK))
}
