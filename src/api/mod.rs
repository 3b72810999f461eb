use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};

use crate::middleware::auth::require_reporter;
use crate::AppState;

pub mod handlers;

/// Build the service router. Login and the health probes are public;
/// everything else sits behind the access gate.
pub fn app(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/auth/me", get(handlers::me))
        .route("/incident/all", get(handlers::list_incidents))
        .route("/incident", post(handlers::create_incident))
        .route(
            "/incident/:id",
            get(handlers::get_incident)
                .put(handlers::update_incident)
                .delete(handlers::delete_incident),
        )
        .route("/reporter/all", get(handlers::list_reporters))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_reporter,
        ));

    Router::new()
        .route("/", get(handlers::status))
        .route("/healthz", get(|| async { "ok" }))
        .route("/auth/login", post(handlers::login))
        .merge(protected)
        .fallback(fallback_404)
        .with_state(state)
}

async fn fallback_404() -> StatusCode {
    StatusCode::NOT_FOUND
}
