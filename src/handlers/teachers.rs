use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    error::Result,
    handlers::json::json_response,
    services::teachers as teacher_service,
    state::AppState,
    validation::auth::parse_id,
};

/// Lists all teachers.
#[axum::debug_handler]
pub async fn find_all(State(state): State<AppState>) -> Result<Response> {
    let teachers = teacher_service::list_teachers(&state.db).await;
    json_response(StatusCode::OK, &teachers)
}

/// Gets one teacher.
#[axum::debug_handler]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let teacher = teacher_service::get_teacher(&state.db, parse_id(&id)?).await?;
    json_response(StatusCode::OK, &teacher)
}
