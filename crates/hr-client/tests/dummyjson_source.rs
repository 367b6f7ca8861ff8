//! DummyJsonSource against an in-process users API.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use hr_client::{DummyJsonSource, EmployeeLoader, LoadError, UserSource};
use hr_enricher::RandomEnricher;

fn user(id: u32) -> Value {
    json!({
        "id": id,
        "firstName": format!("First{id}"),
        "lastName": format!("Last{id}"),
        "age": 30 + id,
        "email": format!("user{id}@x.dummyjson.com"),
        "phone": "+1 555 0100",
        "address": {"address": "1 Main St", "city": "Springfield", "state": "IL", "postalCode": "62701"},
        "company": {"department": "Engineering", "name": "Acme", "title": "Engineer"},
        "hair": {"color": "Brown"}
    })
}

async fn list_users(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: u32 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(30);
    let users: Vec<Value> = (1..=limit.min(5)).map(user).collect();
    Json(json!({ "users": users, "total": 5, "skip": 0, "limit": limit }))
}

async fn get_user(Path(id): Path<u32>) -> Response {
    match id {
        1..=5 => Json(user(id)).into_response(),
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        501 => (StatusCode::OK, "not json").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("User with id '{id}' not found") })),
        )
            .into_response(),
    }
}

async fn spawn_api() -> String {
    let app = Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn source(base: &str) -> DummyJsonSource {
    DummyJsonSource::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_users_sends_limit() {
    let base = spawn_api().await;
    let users = source(&base).fetch_users(3).await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].first_name, "First1");
    assert_eq!(users[2].address.city, "Springfield");
    assert_eq!(users[2].address.postal_code, "62701");
}

#[tokio::test]
async fn test_fetch_user_by_id() {
    let base = spawn_api().await;
    let user = source(&base).fetch_user(4).await.unwrap();
    assert_eq!(user.id, 4);
    assert_eq!(user.email, "user4@x.dummyjson.com");
    assert_eq!(user.company.title, "Engineer");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let base = spawn_api().await;
    let err = source(&base).fetch_user(42).await.unwrap_err();
    assert!(matches!(err, LoadError::NotFound(42)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let base = spawn_api().await;
    let err = source(&base).fetch_user(500).await.unwrap_err();
    assert!(matches!(err, LoadError::Status(500)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let base = spawn_api().await;
    let err = source(&base).fetch_user(501).await.unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(&format!("http://{addr}")).fetch_users(1).await.unwrap_err();
    assert!(matches!(err, LoadError::Transport(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_loader_enriches_fetched_users() {
    let base = spawn_api().await;
    let mut loader = EmployeeLoader::new(source(&base), RandomEnricher::seeded(3)).with_limit(5);
    let employees = loader.load_all().await.unwrap();

    assert_eq!(employees.len(), 5);
    for employee in &employees {
        assert!(employee.department.is_known());
        assert!((1..=5).contains(&employee.rating()));
        assert!(!employee.projects.is_empty());
    }
}
