use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{
    crypto::token::token_digest,
    models::token::AuthUser,
    repositories::token as token_repo,
    state::AppState,
};

/// Extracts the bearer token from the `Authorization` header.
///
/// # Arguments
///
/// * `request` - The incoming request.
///
/// # Returns
///
/// An `Option` containing the token if found.
fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// A middleware that requires a valid bearer token to be present.
///
/// On success the caller is inserted into the request extensions as
/// [`AuthUser`].
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    tracing::debug!("🔐 Checking authentication...");

    let digest = extract_bearer_token(&request)
        .map(token_digest)
        .ok_or_else(|| {
            tracing::warn!("❌ No bearer token found");
            StatusCode::UNAUTHORIZED
        })?;

    let token = token_repo::find_valid_token(&state.db, &digest)
        .await
        .ok_or_else(|| {
            tracing::warn!("❌ Unknown or expired token");
            StatusCode::UNAUTHORIZED
        })?;

    tracing::debug!("✅ User authenticated: {}", token.user_id);

    request.extensions_mut().insert(AuthUser {
        user_id: token.user_id,
    });

    Ok(next.run(request).await)
}
