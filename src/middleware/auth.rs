//! Access gate — per-request authentication for every protected route.
//!
//! Workflow:
//! 1. Extract the bearer token from the `Authorization` header
//! 2. Validate signature and expiry via the token service
//! 3. Resolve the subject username in the credential store
//! 4. Reject disabled accounts
//! 5. Attach the resolved `Reporter` to the request for handlers
//!
//! Missing token, expired token, bad signature, and token-for-a-deleted
//! account all collapse into the same `Unauthenticated` failure so a caller
//! cannot probe which accounts exist.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::AppError;
use crate::models::reporter::Reporter;
use crate::AppState;

/// Middleware layered over the protected routes. On success the `Reporter`
/// is inserted into request extensions as the request identity.
pub async fn require_reporter(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let reporter = authenticate(&state, req.headers())?;
    req.extensions_mut().insert(reporter);
    Ok(next.run(req).await)
}

/// Resolve a raw `Authorization` header to an active reporter.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Reporter, AppError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthenticated)?;

    let username = state.tokens.validate(token).map_err(|e| {
        tracing::debug!(reason = %e, "rejected bearer token");
        AppError::Unauthenticated
    })?;

    // A valid token whose subject no longer exists is indistinguishable
    // from a bad token.
    let reporter = state
        .reporters
        .find(&username)
        .ok_or(AppError::Unauthenticated)?;

    if reporter.disabled {
        tracing::debug!(username = %reporter.username, "disabled account rejected");
        return Err(AppError::AccountDisabled);
    }

    Ok(reporter)
}
