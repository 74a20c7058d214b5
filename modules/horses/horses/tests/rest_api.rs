#![allow(clippy::unwrap_used, clippy::expect_used)]

//! REST endpoints end to end: router, handlers, services and an in-memory database.

mod support;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use support::TestContext;
use tower::ServiceExt;

async fn app() -> Router {
    let ctx = TestContext::new().await;
    ctx.module.register_rest(Router::new())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Option<String>, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    if status.is_client_error() || status.is_server_error() {
        assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    }
    (status, location, json)
}

#[tokio::test]
async fn test_horse_lifecycle() {
    let app = app().await;

    let (status, location, owner) = send(
        &app,
        "POST",
        "/owners",
        Some(json!({"firstName": "Jane", "lastName": "Doe", "email": "jane@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let owner_id = owner["id"].as_i64().unwrap();
    assert_eq!(location, Some(format!("/owners/{owner_id}")));

    let (status, location, storm) = send(
        &app,
        "POST",
        "/horses",
        Some(json!({
            "name": "Storm",
            "dateOfBirth": "2015-01-01",
            "sex": "FEMALE",
            "ownerId": owner_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let storm_id = storm["id"].as_i64().unwrap();
    assert_eq!(location, Some(format!("/horses/{storm_id}")));
    assert_eq!(storm["owner"]["firstName"], "Jane");

    let (status, _, fetched) = send(&app, "GET", &format!("/horses/{storm_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, storm);

    let (status, _, updated) = send(
        &app,
        "PUT",
        &format!("/horses/{storm_id}"),
        Some(json!({
            "name": "Storm II",
            "description": "renamed",
            "dateOfBirth": "2015-01-01",
            "sex": "FEMALE"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Storm II");
    assert!(updated["owner"].is_null());

    let (status, _, list) = send(&app, "GET", "/horses?sex=FEMALE&name=storm", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _, body) = send(&app, "DELETE", &format!("/horses/{storm_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _, problem) = send(&app, "GET", &format!("/horses/{storm_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["status"], 404);
    assert_eq!(problem["instance"], format!("/horses/{storm_id}"));
}

#[tokio::test]
async fn test_parent_sex_violation_is_400_with_field_errors() {
    let app = app().await;
    let (_, _, stallion) = send(
        &app,
        "POST",
        "/horses",
        Some(json!({"name": "Thunder", "dateOfBirth": "2012-04-20", "sex": "MALE"})),
    )
    .await;

    let (status, _, problem) = send(
        &app,
        "POST",
        "/horses",
        Some(json!({
            "name": "Foal",
            "dateOfBirth": "2021-01-01",
            "sex": "FEMALE",
            "parentFemaleId": stallion["id"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["errors"][0]["field"], "parentFemaleId");
}

#[tokio::test]
async fn test_missing_references_are_404() {
    let app = app().await;

    let (status, _, _) = send(
        &app,
        "POST",
        "/horses",
        Some(json!({"name": "Foal", "dateOfBirth": "2021-01-01", "sex": "MALE", "parentMaleId": 99})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, "DELETE", "/owners/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, "GET", "/owners/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_requests_are_400() {
    let app = app().await;

    let (status, _, problem) = send(
        &app,
        "POST",
        "/horses",
        Some(json!({"name": "Storm", "dateOfBirth": "not-a-date", "sex": "FEMALE"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["code"], "HORSES_MALFORMED_REQUEST_V1");

    let (status, _, _) = send(&app, "GET", "/horses?bornBefore=yesterday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&app, "GET", "/horses/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_referenced_owner_delete_is_409() {
    let app = app().await;
    let (_, _, owner) = send(
        &app,
        "POST",
        "/owners",
        Some(json!({"firstName": "Jane", "lastName": "Doe"})),
    )
    .await;
    let owner_id = owner["id"].as_i64().unwrap();
    send(
        &app,
        "POST",
        "/horses",
        Some(json!({"name": "Storm", "dateOfBirth": "2015-01-01", "sex": "FEMALE", "ownerId": owner_id})),
    )
    .await;

    let (status, _, problem) = send(&app, "DELETE", &format!("/owners/{owner_id}"), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["code"], "HORSES_CONFLICT_V1");
}

#[tokio::test]
async fn test_owner_search() {
    let app = app().await;
    for (first, last) in [("Jane", "Doe"), ("John", "Doe"), ("Max", "Power")] {
        send(
            &app,
            "POST",
            "/owners",
            Some(json!({"firstName": first, "lastName": last})),
        )
        .await;
    }

    let (status, _, found) = send(&app, "GET", "/owners?name=doe&maxAmount=1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["lastName"], "Doe");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;

    let (status, _, doc) = send(&app, "GET", "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/horses"]["get"].is_object());
}
