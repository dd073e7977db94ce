use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use http::{header, Method};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{handlers, middleware_layer, state::AppState};

/// Builds the REST API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(86400));

    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route(
            "/api/session",
            get(handlers::sessions::find_all).post(handlers::sessions::create),
        )
        .route(
            "/api/session/{id}",
            get(handlers::sessions::find_by_id)
                .put(handlers::sessions::update)
                .delete(handlers::sessions::delete),
        )
        .route(
            "/api/session/{id}/participate/{user_id}",
            post(handlers::sessions::participate)
                .delete(handlers::sessions::no_longer_participate),
        )
        .route("/api/teacher", get(handlers::teachers::find_all))
        .route("/api/teacher/{id}", get(handlers::teachers::find_by_id))
        .route(
            "/api/user/{id}",
            get(handlers::users::find_by_id).delete(handlers::users::delete),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state);

    Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false))
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(cors)
}
