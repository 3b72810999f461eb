//! End-to-end tests against the assembled router: login, gate rejection
//! paths, incident CRUD, and the listing pipeline.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cyberhq::auth::token::TokenService;
use cyberhq::config::Config;
use cyberhq::{api, seed, AppState};

const SECRET: &str = "integration-secret";

async fn app() -> (Router, Arc<AppState>) {
    let cfg = Config {
        port: 0,
        jwt_secret: SECRET.into(),
        jwt_algorithm: "HS256".into(),
        token_ttl_minutes: 30,
    };
    let state = Arc::new(AppState::new(cfg).unwrap());
    seed::seed_reporters(&state.reporters);
    seed::seed_incidents(&state.incidents).await;
    (api::app(state.clone()), state)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({ "username": username, "password": password }),
        ))
        .await
        .unwrap()
}

async fn token_for_john(app: &Router) -> String {
    let resp = login(app, "john.doe", "123456").await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

// ── Auth ─────────────────────────────────────────────────────

#[tokio::test]
async fn status_probe_is_public() {
    let (app, _) = app().await;
    let resp = app.oneshot(get("/", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "OK");
}

#[tokio::test]
async fn login_returns_profile_and_token() {
    let (app, _) = app().await;
    let resp = login(&app, "john.doe", "123456").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["username"], "john.doe");
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john.doe@mail.com");
    assert_eq!(body["company"], "ABC");
    assert_eq!(body["token_type"], "bearer");
    assert!(body["access_token"].as_str().unwrap().contains('.'));
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let (app, _) = app().await;
    let resp = login(&app, "john.doe", "hunter2").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"]["code"],
        "invalid_credentials"
    );
}

#[tokio::test]
async fn login_with_unknown_username_fails_identically() {
    let (app, _) = app().await;
    let resp = login(&app, "nobody", "123456").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"]["code"],
        "invalid_credentials"
    );
}

#[tokio::test]
async fn disabled_reporter_cannot_log_in_even_with_correct_password() {
    let (app, _) = app().await;
    let resp = login(&app, "jane.doe", "123456").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "account_disabled");
    assert!(body.get("access_token").is_none());
}

#[tokio::test]
async fn protected_route_without_token_is_401_with_challenge() {
    let (app, _) = app().await;
    let resp = app.oneshot(get("/incident/all", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get("www-authenticate").unwrap(), "Bearer");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let (app, state) = app().await;
    // Same secret, negative lifetime: already expired at issuance.
    let expired_issuer = TokenService::new(SECRET, jsonwebtoken::Algorithm::HS256, -5);
    let john = state.reporters.find("john.doe").unwrap();
    let token = expired_issuer.issue(&john).unwrap();

    let resp = app.oneshot(get("/incident/all", Some(&token))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let (app, _) = app().await;
    let resp = app
        .oneshot(get("/incident/all", Some("not.a.token")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_returns_the_authenticated_profile() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;
    let resp = app.oneshot(get("/auth/me", Some(&token))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["username"], "john.doe");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("disabled").is_none());
}

// ── Incident CRUD ────────────────────────────────────────────

#[tokio::test]
async fn full_incident_lifecycle() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;

    // create
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/incident",
            Some(&token),
            json!({
                "title": "Disk Pressure",
                "description": "Root volume at 95% on app-3.",
                "severity": "medium",
                "reporter": "John Doe",
                "date": "2026-08-01T09:30:00Z",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "not_started");
    assert_eq!(created["created_at"], created["updated_at"]);

    // read back
    let resp = app
        .clone()
        .oneshot(get(&format!("/incident/{id}"), Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["title"], "Disk Pressure");

    // partial update: only status changes
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/incident/{id}"),
            Some(&token),
            json!({ "status": "closed" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["status"], "closed");
    assert_eq!(updated["title"], "Disk Pressure");
    assert_eq!(updated["severity"], "medium");
    assert_eq!(updated["created_at"], created["created_at"]);

    // delete
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/incident/{id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["message"],
        "Incident deleted successfully"
    );

    // gone
    let resp = app
        .oneshot(get(&format!("/incident/{id}"), Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_unknown_incident_is_404() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/incident/00000000-0000-0000-0000-000000000042",
            Some(&token),
            json!({ "status": "closed" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"]["code"], "not_found");
}

// ── Listing: filter / sort / paginate ────────────────────────

#[tokio::test]
async fn listing_filters_sorts_and_reports_total() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;

    let resp = app
        .oneshot(get(
            "/incident/all?title=outage&sort_by=title&sort_order=1",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    // Fixture data seeds two of each outage.
    assert_eq!(body["total"], 4);
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["title"], "Network Outage");
    assert_eq!(data[3]["title"], "Power Outage");
    assert!(data
        .iter()
        .all(|i| i["title"].as_str().unwrap().to_lowercase().contains("outage")));
}

#[tokio::test]
async fn listing_pagination_reports_pre_pagination_total() {
    let (app, state) = app().await;
    let token = token_for_john(&app).await;
    let seeded = state.incidents.len().await;

    let resp = app
        .oneshot(get("/incident/all?skip=0&limit=5", Some(&token)))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], seeded);
    assert_eq!(body["skip"], 0);
    assert_eq!(body["limit"], 5);
}

#[tokio::test]
async fn listing_combines_severity_and_status_filters() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;

    let resp = app
        .oneshot(get(
            "/incident/all?severity=high&status=closed",
            Some(&token),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert!(data
        .iter()
        .all(|i| i["severity"] == "high" && i["status"] == "closed"));
}

#[tokio::test]
async fn invalid_severity_filter_is_rejected_at_the_boundary() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;
    let resp = app
        .oneshot(get("/incident/all?severity=catastrophic", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Reporters ────────────────────────────────────────────────

#[tokio::test]
async fn reporter_listing_is_paginated_and_never_leaks_hashes() {
    let (app, _) = app().await;
    let token = token_for_john(&app).await;

    let resp = app
        .clone()
        .oneshot(get("/reporter/all", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["total"], 2);
    for reporter in body["data"].as_array().unwrap() {
        assert!(reporter.get("password_hash").is_none());
    }

    let resp = app
        .oneshot(get("/reporter/all?skip=1&limit=5", Some(&token)))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _) = app().await;
    let resp = app.oneshot(get("/nope", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
