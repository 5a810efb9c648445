mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use common::{owner, setup};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use tradebook::api::ApiServer;
use tradebook::infrastructure::auth::jwt::JwtIdentity;

const SECRET: &str = "api-test-secret";

fn app() -> Router {
    let identity = Arc::new(JwtIdentity::new(SECRET).unwrap());
    ApiServer::new(Arc::new(setup()), identity).router()
}

fn token_for(id: &str) -> String {
    JwtIdentity::new(SECRET)
        .unwrap()
        .issue(&owner(id), Duration::hours(1))
        .unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_requires_authentication() {
    let app = app();
    for (method, uri) in [
        ("GET", "/trades"),
        ("POST", "/trades"),
        ("PUT", "/trades/abc"),
        ("DELETE", "/trades/abc"),
        ("GET", "/summary"),
        ("GET", "/dashboard"),
    ] {
        let (status, body) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["error"], "unauthorized");
    }

    let (status, _) = send(&app, "GET", "/trades", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let (status, body) = send(&app(), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_trade_lifecycle_over_http() {
    let app = app();
    let token = token_for("alice");

    let (status, created) = send(
        &app,
        "POST",
        "/trades",
        Some(token.as_str()),
        Some(json!({"itemName": "Knife", "buyPrice": 100, "ownerId": "mallory"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "UNSOLD");
    assert_eq!(created["ownerId"], "alice");
    assert!(created["sellDate"].is_null());
    let id = created["id"].as_str().unwrap().to_string();

    let (status, sold) = send(
        &app,
        "PUT",
        &format!("/trades/{id}"),
        Some(token.as_str()),
        Some(json!({"sellPrice": 150, "siteCommission": 7.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sold["status"], "SOLD");
    assert!(sold["sellDate"].is_string());

    let (status, summary) = send(&app, "GET", "/summary", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalProfit"], "42.5");
    assert_eq!(summary["cashTotal"], "142.5");
    assert_eq!(summary["allSalesCount"], 1);

    let (status, listed) = send(&app, "GET", "/trades?status=sold", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "DELETE", &format!("/trades/{id}"), Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = send(&app, "DELETE", &format!("/trades/{id}"), Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (_, dashboard) = send(&app, "GET", "/dashboard", Some(token.as_str()), None).await;
    assert!(dashboard["trades"].as_array().unwrap().is_empty());
    assert_eq!(dashboard["summary"]["allSalesCount"], 0);
}

#[tokio::test]
async fn test_validation_errors_are_400() {
    let app = app();
    let token = token_for("alice");

    for body in [
        json!({"itemName": "", "buyPrice": 5}),
        json!({"itemName": "AWP", "buyPrice": -5}),
        json!({"itemName": "AWP", "buyPrice": "cheap"}),
        json!({"buyPrice": 5}),
    ] {
        let (status, resp) = send(&app, "POST", "/trades", Some(token.as_str()), Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp["error"], "validation_error");
    }

    let (_, created) = send(
        &app,
        "POST",
        "/trades",
        Some(token.as_str()),
        Some(json!({"itemName": "AWP", "buyPrice": "12.30"})),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    for body in [
        json!({"status": "SOLD"}),
        json!({"sellDate": "2024-01-01T00:00:00Z"}),
        json!({"ownerId": "bob"}),
        json!({"sellPrice": -1}),
    ] {
        let (status, resp) = send(&app, "PUT", &format!("/trades/{id}"), Some(token.as_str()), Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp["error"], "validation_error");
    }

    let (status, _) = send(&app, "GET", "/trades?status=pending", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_owners_trades_are_not_found() {
    let app = app();
    let alice = token_for("alice");
    let bob = token_for("bob");

    let (_, created) = send(
        &app,
        "POST",
        "/trades",
        Some(alice.as_str()),
        Some(json!({"itemName": "Knife", "buyPrice": 100})),
    )
    .await;
    let uri = format!("/trades/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "GET", &uri, Some(bob.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "PUT", &uri, Some(bob.as_str()), Some(json!({"sellPrice": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(&app, "DELETE", &uri, Some(bob.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, bobs) = send(&app, "GET", "/trades", Some(bob.as_str()), None).await;
    assert!(bobs.as_array().unwrap().is_empty());

    let (status, trade) = send(&app, "GET", &uri, Some(alice.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trade["status"], "UNSOLD");
}
