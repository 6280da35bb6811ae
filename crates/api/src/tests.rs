//! Router tests that need no database.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{AppState, create_router};
use kodestudio_core::auth::hash_token;
use kodestudio_db::entities::{reviews, sessions, users};

fn app_with(db: DatabaseConnection) -> Router {
    create_router(AppState {
        db: Arc::new(db),
        session_ttl_hours: 24,
        allowed_origins: Arc::from(Vec::new()),
    })
}

fn app() -> Router {
    app_with(DatabaseConnection::Disconnected)
}

fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    send_to(app(), request).await
}

async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_connection_check() {
    let (status, body) = send(get("/api/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "¡Backend conectado correctamente!");
}

#[tokio::test]
async fn test_estimate_endpoint() {
    let (status, body) = send(post_json(
        "/api/estimate",
        &json!({
            "projectType": "Desarrollo Web",
            "priority": "Medio",
            "technicalRequirements": 3,
            "startDate": "2025-01-01",
            "endDate": "2025-02-01"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["budget"], "2800");
    assert_eq!(body["formatted"], "S/ 2800.00");
    assert_eq!(body["breakdown"]["months"], 1);
}

#[tokio::test]
async fn test_estimate_tolerates_bad_input() {
    let (status, body) = send(post_json(
        "/api/estimate",
        &json!({
            "projectType": "Blockchain",
            "priority": "???",
            "technicalRequirements": "8",
            "startDate": "not a date"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    // No span, 3 extra requirements: 75 rounds to 100.
    assert_eq!(body["budget"], "100");
    assert_eq!(body["formatted"], "S/ 100.00");
}

#[tokio::test]
async fn test_chat() {
    let (status, body) = send(get("/api/chat/greeting")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["reply"],
        "Bienvenido a nuestro servicio de atención al cliente."
    );

    let (status, body) = send(post_json("/api/chat", &json!({ "message": "zzz" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["reply"],
        "No entendí completamente. ¿Podrías ser más específico?"
    );
    assert!(body.get("intent").is_none());
}

#[tokio::test]
async fn test_chat_rejects_blank_message() {
    let (status, body) = send(post_json("/api/chat", &json!({ "message": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_register_validates_before_touching_db() {
    let (status, body) = send(post_json(
        "/api/register",
        &json!({ "username": "adrian", "password": "123" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    for uri in [
        "/api/user",
        "/api/clientes",
        "/api/requirements",
        "/api/requirements/stats",
    ] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["error"], "missing_token", "{uri}");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let request = Request::builder()
        .uri("/api/clientes")
        .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

fn bearer_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_session_lookup_failure_is_500() {
    let db = mock()
        .append_query_errors([DbErr::Custom("connection reset".into())])
        .into_connection();

    let (status, body) = send_to(app_with(db), bearer_get("/api/clientes", "some-token")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_expired_session_is_rejected() {
    let now = Utc::now();
    let user = users::Model {
        id: Uuid::now_v7(),
        username: "adrian".into(),
        password_hash: "$argon2id$stub".into(),
        created_at: now.into(),
        updated_at: now.into(),
    };
    let session = sessions::Model {
        id: Uuid::now_v7(),
        user_id: user.id,
        token_hash: hash_token("stale-token"),
        expires_at: (now - Duration::minutes(1)).into(),
        revoked_at: None,
        created_at: (now - Duration::hours(24)).into(),
        updated_at: (now - Duration::hours(24)).into(),
    };
    let db = mock()
        .append_query_results([[(session, user)]])
        .into_connection();

    let (status, body) = send_to(app_with(db), bearer_get("/api/user", "stale-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");
}

#[tokio::test]
async fn test_estimate_ignores_wrongly_typed_fields() {
    for form in [
        json!({ "projectType": null, "priority": "Alto", "technicalRequirements": 3 }),
        json!({ "projectType": "Desarrollo Web", "startDate": 20_250_101, "endDate": false }),
        json!(["not", "a", "form"]),
    ] {
        let (status, body) = send(post_json("/api/estimate", &form)).await;
        assert_eq!(status, StatusCode::OK, "{form}");
        assert_eq!(body["budget"], "0", "{form}");
        assert_eq!(body["formatted"], "S/ 0.00", "{form}");
    }
}

#[tokio::test]
async fn test_malformed_json_gets_error_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/estimate")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"projectType\": "))
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_wrong_field_type_gets_error_body() {
    let (status, body) = send(post_json(
        "/api/chat",
        &json!({ "message": ["hola"] }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

fn review(cliente: &str, calificacion: i16, descripcion: &str) -> reviews::Model {
    reviews::Model {
        id: Uuid::now_v7(),
        cliente: cliente.into(),
        calificacion,
        descripcion: descripcion.into(),
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_reviews_are_public_array() {
    let db = mock()
        .append_query_results([vec![
            review("Lucía Ramos", 5, "Entregaron antes de lo previsto."),
            review("Carlos Pérez", 4, "Muy buena comunicación."),
        ]])
        .into_connection();

    let (status, body) = send_to(app_with(db), get("/api/reviews")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "cliente": "Lucía Ramos",
                "calificacion": 5,
                "descripcion": "Entregaron antes de lo previsto."
            },
            {
                "cliente": "Carlos Pérez",
                "calificacion": 4,
                "descripcion": "Muy buena comunicación."
            }
        ])
    );
}

#[tokio::test]
async fn test_reviews_empty() {
    let db = mock()
        .append_query_results([Vec::<reviews::Model>::new()])
        .into_connection();

    let (status, body) = send_to(app_with(db), get("/api/reviews")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
