// tests/search_client_test.rs — Integration test: HTTP search client against a local server

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use aichef::core::session::{SearchSession, SessionState};
use aichef::core::types::UserIdentity;
use aichef::infra::config::ServiceConfig;
use aichef::search::{HttpSearchService, SearchError, SearchOutcome, SearchRequest, SearchService};

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> HttpSearchService {
    HttpSearchService::new(&ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    })
}

/// Echoes what it received into the advisory so tests can inspect the request.
async fn echo_search(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let user = headers
        .get("x-username")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    Json(json!({
        "candidates": [
            {"recipe_id": "1", "recipe_name": "Hainanese chicken rice", "tags": ["chicken", "rice"]},
            {"recipe_id": "2", "recipe_name": "Chicken congee", "steps": [
                {"step_index": 1, "description": "Simmer rice", "image_url": null}
            ]}
        ],
        "ai_message": format!(
            "{}|{}|{}|{}",
            body["query"].as_str().unwrap_or(""),
            body["limit"],
            body.get("refinement").and_then(|r| r.as_str()).unwrap_or("-"),
            user
        )
    }))
}

#[tokio::test]
async fn test_candidates_response() {
    let base = serve(Router::new().route("/api/search", post(echo_search))).await;
    let outcome = client(&base)
        .search(
            SearchRequest::new("chicken and rice")
                .with_refinement("no spice")
                .for_user(UserIdentity::named("ana")),
        )
        .await
        .unwrap();

    let (candidates, advisory) = outcome.into_parts();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].name, "Hainanese chicken rice");
    assert_eq!(candidates[1].steps[0].description, "Simmer rice");
    assert_eq!(advisory.as_deref(), Some("chicken and rice|5|no spice|ana"));
}

#[tokio::test]
async fn test_anonymous_sends_no_username() {
    let base = serve(Router::new().route("/api/search", post(echo_search))).await;
    let (_, advisory) = client(&base)
        .search(SearchRequest::new("tofu"))
        .await
        .unwrap()
        .into_parts();
    assert_eq!(advisory.as_deref(), Some("tofu|5|-|-"));
}

#[tokio::test]
async fn test_single_recipe_response() {
    let router = Router::new().route(
        "/api/search",
        post(|| async { Json(json!({"recipe_id": "9", "recipe_name": "Dal"})) }),
    );
    let base = serve(router).await;
    let outcome = client(&base).search(SearchRequest::new("dal")).await.unwrap();
    assert!(matches!(outcome, SearchOutcome::Single(ref r) if r.id == "9"));
}

#[tokio::test]
async fn test_error_envelope_detail() {
    let router = Router::new().route(
        "/api/search",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": {"msg": "down"}})),
            )
        }),
    );
    let base = serve(router).await;
    let err = client(&base)
        .search(SearchRequest::new("soup"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::Status {
            status: 500,
            detail: Some(json!({"msg": "down"})),
        }
    );
}

#[tokio::test]
async fn test_error_without_json_body() {
    let router = Router::new().route(
        "/api/search",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
    );
    let base = serve(router).await;
    let err = client(&base)
        .search(SearchRequest::new("soup"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert!(err.detail().is_none());
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let router = Router::new().route("/api/search", post(|| async { "not json" }));
    let base = serve(router).await;
    let err = client(&base)
        .search(SearchRequest::new("soup"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let svc = client(&format!("http://{addr}"));
    let err = svc.search(SearchRequest::new("soup")).await.unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
    assert!(err.status().is_none());
    assert!(svc.health().await.is_err());
}

#[tokio::test]
async fn test_health_check() {
    let router = Router::new().route("/", get(|| async { Json(json!({"status": "ok"})) }));
    let base = serve(router).await;
    assert!(client(&base).health().await.unwrap());
}

#[tokio::test]
async fn test_session_reports_server_error() {
    let router = Router::new().route(
        "/api/search",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": {"msg": "down"}})),
            )
        }),
    );
    let base = serve(router).await;
    let mut session = SearchSession::new(Arc::new(client(&base)), UserIdentity::Anonymous);
    session.search("soup").await;
    assert_eq!(
        session.state(),
        &SessionState::Error(r#"Connection Failed: {"msg":"down"}. (Status: 500)"#.into())
    );
}
