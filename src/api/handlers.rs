use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::password::verify_password;
use crate::errors::AppError;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::incident::{Incident, IncidentDraft, IncidentPatch, Severity, Status};
use crate::models::pagination::{Page, PageParams};
use crate::models::reporter::{Reporter, ReporterProfile};
use crate::query::{self, IncidentFilter, SortKey, SortOrder};
use crate::AppState;

// ── Request DTOs ─────────────────────────────────────────────

/// Query parameters for the incident listing: filters, sort, pagination.
/// Severity and status are type-checked at this boundary; unknown sort
/// fields and orders fall back to their defaults instead.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentListParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reporter: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    pub sort_by: Option<String>,
    pub sort_order: Option<i64>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

// ── Handlers ─────────────────────────────────────────────────

/// GET / — status probe.
pub async fn status() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}

/// POST /auth/login — verify credentials, issue a token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let reporter = state
        .reporters
        .find(&payload.username)
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&payload.password, &reporter.password_hash) {
        tracing::debug!(username = %payload.username, "login failed: bad password");
        return Err(AppError::InvalidCredentials);
    }

    if reporter.disabled {
        tracing::debug!(username = %payload.username, "login refused: account disabled");
        return Err(AppError::AccountDisabled);
    }

    let access_token = state
        .tokens
        .issue(&reporter)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token issuance failed: {e}")))?;

    tracing::info!(username = %reporter.username, "login succeeded");

    Ok(Json(LoginResponse {
        id: reporter.id,
        username: reporter.username,
        name: reporter.name,
        email: reporter.email,
        company: reporter.company,
        access_token,
        token_type: "bearer".into(),
    }))
}

/// GET /auth/me — profile of the authenticated reporter.
pub async fn me(Extension(reporter): Extension<Reporter>) -> Json<ReporterProfile> {
    Json(ReporterProfile::from(&reporter))
}

/// GET /incident/all — filtered, sorted, paginated listing.
pub async fn list_incidents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IncidentListParams>,
) -> Json<Page<Incident>> {
    let filter = IncidentFilter {
        title: params.title,
        description: params.description,
        reporter: params.reporter,
        severity: params.severity,
        status: params.status,
    };
    let key = SortKey::parse_or_default(params.sort_by.as_deref());
    let order = SortOrder::parse_or_default(params.sort_order);
    let page = PageParams {
        skip: params.skip,
        limit: params.limit,
    };

    let snapshot = state.incidents.snapshot().await;
    let (data, total) = query::search(snapshot, &filter, key, order, page);

    Json(Page::new(data, total, page))
}

/// GET /incident/:id
pub async fn get_incident(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Incident>, AppError> {
    state
        .incidents
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("incident"))
}

/// POST /incident — create from validated fields.
pub async fn create_incident(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<IncidentDraft>,
) -> (StatusCode, Json<Incident>) {
    let incident = state.incidents.create(draft).await;
    tracing::info!(id = %incident.id, title = %incident.title, "incident created");
    (StatusCode::CREATED, Json(incident))
}

/// PUT /incident/:id — partial update; absent fields are left untouched.
pub async fn update_incident(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<IncidentPatch>,
) -> Result<Json<Incident>, AppError> {
    let updated = state
        .incidents
        .update(id, patch)
        .await
        .ok_or(AppError::NotFound("incident"))?;
    tracing::info!(id = %id, "incident updated");
    Ok(Json(updated))
}

/// DELETE /incident/:id
pub async fn delete_incident(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.incidents.delete(id).await {
        return Err(AppError::NotFound("incident"));
    }
    tracing::info!(id = %id, "incident deleted");
    Ok(Json(json!({ "message": "Incident deleted successfully" })))
}

/// GET /reporter/all — paginated reporter listing. The password hash is
/// excluded by the model's serializer.
pub async fn list_reporters(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageParams>,
) -> Json<Page<Reporter>> {
    let all = state.reporters.list();
    let total = all.len();
    let data: Vec<Reporter> = all
        .into_iter()
        .skip(page.skip.unwrap_or(0))
        .take(page.limit.unwrap_or(usize::MAX))
        .collect();

    Json(Page::new(data, total, page))
}
