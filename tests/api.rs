//! End-to-end tests driving the character routes through the axum router.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use character_service::{character_routes, AppState, CharacterStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

// One connection so the in-memory database is shared across requests.
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    let store = CharacterStore::new(pool);
    store.ensure_table().await.expect("ensure table");
    character_routes(AppState { store })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn luke() -> Value {
    json!({
        "id": 1,
        "name": "Luke",
        "height": 172,
        "mass": 77,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": 19
    })
}

#[tokio::test]
async fn create_then_get_returns_the_same_record() {
    let app = test_app().await;

    let (status, created) = send(&app, Method::POST, "/character/add", Some(luke())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, luke());

    let (status, fetched) = send(&app, Method::GET, "/character/get/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, luke());
}

#[tokio::test]
async fn duplicate_id_is_rejected_without_mutating_state() {
    let app = test_app().await;
    send(&app, Method::POST, "/character/add", Some(luke())).await;

    let mut impostor = luke();
    impostor["name"] = json!("Leia");
    let (status, body) = send(&app, Method::POST, "/character/add", Some(impostor)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Character with this ID already exists" })
    );

    let (_, fetched) = send(&app, Method::GET, "/character/get/1", None).await;
    assert_eq!(fetched["name"], "Luke");
}

#[tokio::test]
async fn invalid_payload_lists_every_offending_field_and_persists_nothing() {
    let app = test_app().await;

    let mut payload = luke();
    payload["height"] = json!(0);
    payload["mass"] = json!(-5);
    payload["name"] = json!("");
    let (status, body) = send(&app, Method::POST, "/character/add", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = body["errors"].as_array().unwrap();
    let mut fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["height", "mass", "name"]);
    assert!(errors.iter().all(|e| e["message"].is_string()));

    let (_, listed) = send(&app, Method::GET, "/character/getAll", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn empty_body_reports_all_fields_missing() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/character/add", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn non_object_body_is_a_bad_request() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/character/add", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "body must be a JSON object" }));
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/character/get/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Character not found" }));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found_and_leaves_state_unchanged() {
    let app = test_app().await;
    send(&app, Method::POST, "/character/add", Some(luke())).await;

    let (status, body) = send(&app, Method::DELETE, "/character/delete/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Character not found" }));

    let (_, listed) = send(&app, Method::GET, "/character/getAll", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_confirms_and_makes_get_not_found() {
    let app = test_app().await;
    send(&app, Method::POST, "/character/add", Some(luke())).await;

    let (status, body) = send(&app, Method::DELETE, "/character/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "info": "Character with id '1' was deleted" }));

    let (status, _) = send(&app, Method::GET, "/character/get/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_empty_then_holds_summaries_in_creation_order() {
    let app = test_app().await;

    let (status, listed) = send(&app, Method::GET, "/character/getAll", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let mut second = luke();
    second["id"] = json!(2);
    second["name"] = json!("Leia");
    second["hair_color"] = json!("brown");
    send(&app, Method::POST, "/character/add", Some(second)).await;
    send(&app, Method::POST, "/character/add", Some(luke())).await;

    let (_, listed) = send(&app, Method::GET, "/character/getAll", None).await;
    assert_eq!(
        listed,
        json!([
            { "id": 2, "name": "Leia", "height": 172, "mass": 77, "birth_year": 19, "eye_color": "blue" },
            { "id": 1, "name": "Luke", "height": 172, "mass": 77, "birth_year": 19, "eye_color": "blue" }
        ])
    );
}
