//! Integration tests for the REST API.
//!
//! These tests verify that routes are correctly wired to handlers and that
//! the JSON shapes and status codes match what clients expect.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use homedash_axum::bootstrap::{AxumContext, CorsConfig};
use homedash_axum::routes::create_router;
use homedash_store::MemoryDocumentStore;

fn test_app() -> Router {
    let ctx = AxumContext::with_store(Arc::new(MemoryDocumentStore::new()));
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Send one request through a clone of the router.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn router_link() -> Value {
    json!({"name": "Router", "url": "http://192.168.1.1", "description": "admin"})
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn create_link_assigns_id_and_appends_to_order() {
    let app = test_app();

    let (status, created) = send(&app, Method::POST, "/api/links", Some(router_link())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Router");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, links) = send(&app, Method::GET, "/api/links", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(links["links"], json!([created]));

    let (_, order) = send(&app, Method::GET, "/api/links/order", None).await;
    assert_eq!(order["order"].as_array().unwrap().last().unwrap(), &json!(id));
}

#[tokio::test]
async fn create_link_accepts_caller_supplied_id() {
    let app = test_app();
    let mut payload = router_link();
    payload["id"] = json!("client-id");
    payload["createdAt"] = json!(1_000);
    payload["updatedAt"] = json!(1_000);

    let (_, created) = send(&app, Method::POST, "/api/links", Some(payload)).await;

    assert_eq!(created["id"], "client-id");
    assert_eq!(created["createdAt"], 1_000);
}

#[tokio::test]
async fn update_link_bumps_updated_at_and_keeps_created_at() {
    let app = test_app();
    let (_, created) = send(&app, Method::POST, "/api/links", Some(router_link())).await;
    let id = created["id"].as_str().unwrap();

    let mut patch = created.clone();
    patch["name"] = json!("Gateway");
    patch["createdAt"] = json!(0);
    let (status, updated) = send(&app, Method::PUT, &format!("/api/links/{id}"), Some(patch)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Gateway");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].as_i64().unwrap() > created["updatedAt"].as_i64().unwrap());

    let (_, links) = send(&app, Method::GET, "/api/links", None).await;
    assert_eq!(links["links"], json!([updated]));
}

#[tokio::test]
async fn update_unknown_link_is_404() {
    let app = test_app();
    let body = json!({
        "id": "missing", "name": "x", "url": "http://x", "description": "",
        "createdAt": 1, "updatedAt": 1
    });

    let (status, error) = send(&app, Method::PUT, "/api/links/missing", Some(body)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, json!({"error": "Link not found", "status": 404}));
}

#[tokio::test]
async fn delete_link_removes_it_from_links_and_order() {
    let app = test_app();
    let (_, first) = send(&app, Method::POST, "/api/links", Some(router_link())).await;
    let (_, second) = send(&app, Method::POST, "/api/links", Some(router_link())).await;
    let id = first["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/links/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, links) = send(&app, Method::GET, "/api/links", None).await;
    assert_eq!(links["links"], json!([second.clone()]));
    let (_, order) = send(&app, Method::GET, "/api/links/order", None).await;
    assert_eq!(order["order"], json!([second["id"]]));
}

#[tokio::test]
async fn delete_unknown_link_is_404() {
    let (status, _) = send(&test_app(), Method::DELETE, "/api/links/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_round_trip_is_wholesale() {
    let app = test_app();
    let order = json!({"order": ["c", "a", "ghost", "a"]});

    let (status, ack) = send(&app, Method::PUT, "/api/links/order", Some(order.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({"success": true}));

    let (_, stored) = send(&app, Method::GET, "/api/links/order", None).await;
    assert_eq!(stored, order);
}

#[tokio::test]
async fn dashboard_settings_defaults_and_save() {
    let app = test_app();

    let (_, defaults) = send(&app, Method::GET, "/api/dashboard/settings", None).await;
    assert_eq!(defaults["title"], "Services Dashboard");

    let settings = json!({
        "title": "Homelab",
        "subtitle": "Everything on the LAN",
        "primaryColor": "#000000",
        "backgroundColor": "#fafafa"
    });
    let (status, ack) = send(
        &app,
        Method::PUT,
        "/api/dashboard/settings",
        Some(settings.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({"success": true}));

    let (_, stored) = send(&app, Method::GET, "/api/dashboard/settings", None).await;
    assert_eq!(stored, settings);
}

#[tokio::test]
async fn auth_settings_mask_password_and_preserve_it() {
    let app = test_app();
    let enabled = json!({"isEnabled": true, "username": "admin", "password": "hunter2"});
    send(&app, Method::PUT, "/api/auth/settings", Some(enabled)).await;

    let (_, masked) = send(&app, Method::GET, "/api/auth/settings", None).await;
    assert_eq!(masked["password"], "********");

    // Write back what was read: the real password must survive.
    send(&app, Method::PUT, "/api/auth/settings", Some(masked)).await;
    let login = json!({"username": "admin", "password": "hunter2"});
    let (status, body) = send(&app, Method::POST, "/api/auth/login", Some(login)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_with_auth_disabled_always_succeeds() {
    let app = test_app();
    let empty = json!({"username": "", "password": ""});

    let (status, body) = send(&app, Method::POST, "/api/auth/login", Some(empty)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "token": "disabled"}));
}

#[tokio::test]
async fn login_with_wrong_credentials_is_401() {
    let app = test_app();
    let enabled = json!({"isEnabled": true, "username": "admin", "password": "hunter2"});
    send(&app, Method::PUT, "/api/auth/settings", Some(enabled)).await;

    let wrong = json!({"username": "admin", "password": "nope"});
    let (status, body) = send(&app, Method::POST, "/api/auth/login", Some(wrong)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"success": false, "message": "Invalid credentials"}));
}

#[tokio::test]
async fn verify_token() {
    let app = test_app();
    let (_, open) = send(&app, Method::POST, "/api/auth/verify", Some(json!({"token": ""}))).await;
    assert_eq!(open, json!({"valid": true}));

    let enabled = json!({"isEnabled": true, "username": "admin", "password": "hunter2"});
    send(&app, Method::PUT, "/api/auth/settings", Some(enabled)).await;

    let (_, empty) = send(&app, Method::POST, "/api/auth/verify", Some(json!({"token": ""}))).await;
    assert_eq!(empty, json!({"valid": false}));
    let (_, any) = send(&app, Method::POST, "/api/auth/verify", Some(json!({"token": "1"}))).await;
    assert_eq!(any, json!({"valid": true}));
}

#[tokio::test]
async fn malformed_json_is_rejected_by_extractor() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/links")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}
