//! Links API Integration Tests
//!
//! Tests full HTTP request/response cycles for the link repository endpoints
//! against the in-memory row store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use linkshelf::api;
use linkshelf::config::{ServiceAccount, SheetConfig};
use linkshelf::store::{GoogleSheets, MemoryStore, RowCells, SheetRow};

fn row(category: &str, title: &str, url: &str, description: &str) -> RowCells {
    SheetRow::new(category, title, url, description).to_cells()
}

fn setup_test_app(store: MemoryStore) -> axum::Router {
    let api_state = api::ApiState::new(Arc::new(store));
    api::router().with_state(api_state)
}

/// An app whose store cannot authenticate, so every request that reaches the
/// store fails.
fn unauthenticated_app() -> axum::Router {
    let store = GoogleSheets::new(SheetConfig {
        sheet_id: "doc".to_string(),
        sheet_name: "Sheet1".to_string(),
        token_uri: "http://127.0.0.1:9/token".to_string(),
        api_base: "http://127.0.0.1:9/v4".to_string(),
        account: ServiceAccount::default(),
    })
    .expect("Failed to build client");
    api::router().with_state(api::ApiState::new(Arc::new(store)))
}

async fn seeded_app(rows: Vec<RowCells>) -> (axum::Router, MemoryStore) {
    let store = MemoryStore::new("Sheet1");
    store.seed(rows).await.expect("Failed to seed rows");
    (setup_test_app(store.clone()), store)
}

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&body).expect("Invalid JSON response");
    (status, value)
}

fn get_links(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn list(app: &axum::Router) -> Value {
    let (status, body) = json_response(app, get_links("/links")).await;
    assert_eq!(status, StatusCode::OK);
    body
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_empty_sheet() {
    let (app, _store) = seeded_app(Vec::new()).await;

    let body = list(&app).await;
    assert_eq!(body, json!({ "linkCategories": [] }));
}

#[tokio::test]
async fn test_list_groups_rows_by_category() {
    let (app, _store) = seeded_app(vec![
        row("Dev", "A", "https://a.test", ""),
        row("Dev", "B", "https://b.test", ""),
        row("Art", "C", "https://c.test", "nice"),
    ])
    .await;

    let body = list(&app).await;
    let categories = body["linkCategories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);

    assert_eq!(categories[0]["name"], "Dev");
    assert_eq!(categories[0]["description"], "");
    let dev = categories[0]["links"].as_array().unwrap();
    assert_eq!(dev.len(), 2);
    assert_eq!(dev[0]["title"], "A");
    assert_eq!(dev[0]["url"], "https://a.test");
    assert_eq!(dev[0]["rowIndex"], 0);
    assert!(dev[0].get("description").is_none());
    assert_eq!(dev[1]["rowIndex"], 1);

    assert_eq!(categories[1]["name"], "Art");
    assert_eq!(categories[1]["description"], "nice");
    assert_eq!(categories[1]["links"][0]["title"], "C");
    assert_eq!(categories[1]["links"][0]["rowIndex"], 2);
}

#[tokio::test]
async fn test_list_skips_incomplete_rows_but_keeps_positions() {
    let (app, _store) = seeded_app(vec![
        row("Dev", "", "https://a.test", ""),
        row("Dev", "B", "https://b.test", ""),
    ])
    .await;

    let body = list(&app).await;
    let links = body["linkCategories"][0]["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["title"], "B");
    assert_eq!(links[0]["rowIndex"], 1);
}

#[tokio::test]
async fn test_list_reads_generic_column_labels() {
    let rows = vec![RowCells::new()
        .with("col1", "Tools")
        .with("col2", "Generic")
        .with("col3", "https://g.test")];
    let (app, _store) = seeded_app(rows).await;

    let body = list(&app).await;
    assert_eq!(body["linkCategories"][0]["name"], "Tools");
    assert_eq!(body["linkCategories"][0]["links"][0]["url"], "https://g.test");
}

#[tokio::test]
async fn test_list_under_api_prefix() {
    let (app, _store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let (status, body) = json_response(&app, get_links("/api/links")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["linkCategories"][0]["name"], "Dev");
}

#[tokio::test]
async fn test_list_without_worksheets_is_not_found() {
    let app = setup_test_app(MemoryStore::without_worksheets("Sheet1"));

    let (status, body) = json_response(&app, get_links("/links")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Sheet not found");
}

#[tokio::test]
async fn test_list_falls_back_to_first_worksheet() {
    let store = MemoryStore::without_worksheets("Sheet1");
    store
        .add_worksheet("Bookmarks", vec![row("Dev", "A", "https://a.test", "")])
        .await;
    let app = setup_test_app(store);

    let body = list(&app).await;
    assert_eq!(body["linkCategories"][0]["links"][0]["title"], "A");
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_link() {
    let (app, store) = seeded_app(Vec::new()).await;

    let req = json_request(
        "POST",
        "/links",
        json!({
            "category": "Tools",
            "title": "X",
            "url": "https://x.test",
            "description": ""
        }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Link added successfully");

    let rows = store.snapshot().await.unwrap();
    assert_eq!(rows, vec![row("Tools", "X", "https://x.test", "")]);
}

#[tokio::test]
async fn test_create_without_description() {
    let (app, _store) = seeded_app(Vec::new()).await;

    let req = json_request(
        "POST",
        "/links",
        json!({ "category": "Tools", "title": "X", "url": "https://x.test" }),
    );
    let (status, _) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);

    let body = list(&app).await;
    assert_eq!(body["linkCategories"][0]["links"][0]["rowIndex"], 0);
}

#[tokio::test]
async fn test_create_missing_title_leaves_sheet_unchanged() {
    let (app, store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let req = json_request(
        "POST",
        "/links",
        json!({ "category": "Tools", "url": "https://x.test" }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: category, title, url");

    assert_eq!(store.snapshot().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_malformed_body() {
    let (app, store) = seeded_app(Vec::new()).await;

    let req = Request::builder()
        .method("POST")
        .uri("/links")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    assert!(store.snapshot().await.unwrap().is_empty());
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_link_in_place() {
    let (app, store) = seeded_app(vec![
        row("Dev", "A", "https://a.test", ""),
        row("Dev", "B", "https://b.test", ""),
    ])
    .await;

    let req = json_request(
        "PUT",
        "/links",
        json!({
            "rowIndex": 1,
            "category": "Art",
            "title": "B2",
            "url": "https://b2.test",
            "description": "moved"
        }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Link updated successfully");

    let rows = store.snapshot().await.unwrap();
    assert_eq!(rows[0], row("Dev", "A", "https://a.test", ""));
    assert_eq!(rows[1], row("Art", "B2", "https://b2.test", "moved"));
}

#[tokio::test]
async fn test_update_keeps_unrelated_cells() {
    let (app, store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")
        .with("Notes", "keep me")])
    .await;

    let req = json_request(
        "PUT",
        "/links",
        json!({
            "rowIndex": 0,
            "category": "Dev",
            "title": "A2",
            "url": "https://a.test",
            "description": ""
        }),
    );
    let (status, _) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let rows = store.snapshot().await.unwrap();
    assert_eq!(rows[0].get("Title"), Some("A2"));
    assert_eq!(rows[0].get("Notes"), Some("keep me"));
}

#[tokio::test]
async fn test_update_row_index_equal_to_count_is_invalid() {
    let (app, store) = seeded_app(vec![
        row("Dev", "A", "https://a.test", ""),
        row("Dev", "B", "https://b.test", ""),
    ])
    .await;

    let req = json_request(
        "PUT",
        "/links",
        json!({
            "rowIndex": 2,
            "category": "Dev",
            "title": "C",
            "url": "https://c.test",
            "description": ""
        }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid row index");

    let rows = store.snapshot().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], row("Dev", "B", "https://b.test", ""));
}

#[tokio::test]
async fn test_update_negative_row_index_is_invalid() {
    let (app, _store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let req = json_request(
        "PUT",
        "/links",
        json!({
            "rowIndex": -1,
            "category": "Dev",
            "title": "A",
            "url": "https://a.test"
        }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid row index");
}

#[tokio::test]
async fn test_update_missing_fields() {
    let (app, _store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let missing_index = json_request(
        "PUT",
        "/links",
        json!({ "category": "Dev", "title": "A", "url": "https://a.test" }),
    );
    let (status, body) = json_response(&app, missing_index).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let missing_url = json_request(
        "PUT",
        "/links",
        json!({ "rowIndex": 0, "category": "Dev", "title": "A", "url": "" }),
    );
    let (status, body) = json_response(&app, missing_url).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_shifts_following_positions() {
    let (app, store) = seeded_app(vec![
        row("Dev", "A", "https://a.test", ""),
        row("Dev", "B", "https://b.test", ""),
        row("Art", "C", "https://c.test", ""),
    ])
    .await;

    let req = json_request("DELETE", "/links", json!({ "rowIndex": 0 }));
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Link deleted successfully");
    assert_eq!(store.snapshot().await.unwrap().len(), 2);

    let body = list(&app).await;
    assert_eq!(body["linkCategories"][0]["links"][0]["title"], "B");
    assert_eq!(body["linkCategories"][0]["links"][0]["rowIndex"], 0);
    assert_eq!(body["linkCategories"][1]["links"][0]["rowIndex"], 1);
}

#[tokio::test]
async fn test_delete_missing_row_index() {
    let (app, store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let req = json_request("DELETE", "/links", json!({}));
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing rowIndex");
    assert_eq!(store.snapshot().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_out_of_range() {
    let (app, store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let req = json_request("DELETE", "/api/links", json!({ "rowIndex": 5 }));
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid row index");
    assert_eq!(store.snapshot().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_mutations_without_worksheets_are_not_found() {
    let app = setup_test_app(MemoryStore::without_worksheets("Sheet1"));

    let create = json_request(
        "POST",
        "/links",
        json!({ "category": "Tools", "title": "X", "url": "https://x.test" }),
    );
    let (status, body) = json_response(&app, create).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Sheet not found");

    let delete = json_request("DELETE", "/links", json!({ "rowIndex": 0 }));
    let (status, _) = json_response(&app, delete).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_accepts_whole_float_row_index() {
    let (app, store) = seeded_app(vec![
        row("Dev", "A", "https://a.test", ""),
        row("Dev", "B", "https://b.test", ""),
    ])
    .await;

    let update = json_request(
        "PUT",
        "/links",
        json!({
            "rowIndex": 1.0,
            "category": "Dev",
            "title": "B2",
            "url": "https://b2.test"
        }),
    );
    let (status, _) = json_response(&app, update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.snapshot().await.unwrap()[1].get("Title"), Some("B2"));

    let delete = json_request("DELETE", "/links", json!({ "rowIndex": 0.5 }));
    let (status, body) = json_response(&app, delete).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
    assert_eq!(store.snapshot().await.unwrap().len(), 2);
}

// ============================================================================
// Store failures
// ============================================================================

#[tokio::test]
async fn test_list_store_failure_is_server_error_with_details() {
    let app = unauthenticated_app();

    let (status, body) = json_response(&app, get_links("/links")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch links");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("GOOGLE_SERVICE_ACCOUNT_EMAIL"), "{details}");
}

#[tokio::test]
async fn test_mutation_store_failures_are_server_errors_with_details() {
    let app = unauthenticated_app();

    let create = json_request(
        "POST",
        "/api/links",
        json!({ "category": "Tools", "title": "X", "url": "https://x.test" }),
    );
    let (status, body) = json_response(&app, create).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to add link");
    assert!(!body["details"].as_str().unwrap().is_empty());

    let delete = json_request("DELETE", "/api/links", json!({ "rowIndex": 0 }));
    let (status, body) = json_response(&app, delete).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to delete link");
    assert!(!body["details"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_runs_before_the_store() {
    let app = unauthenticated_app();

    let create = json_request("POST", "/links", json!({ "category": "Tools" }));
    let (status, body) = json_response(&app, create).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("details").is_none());
}

// ============================================================================
// End-to-end
// ============================================================================

#[tokio::test]
async fn test_create_update_delete_round() {
    let (app, _store) = seeded_app(vec![row("Dev", "A", "https://a.test", "")]).await;

    let create = json_request(
        "POST",
        "/api/links",
        json!({
            "category": "Tools",
            "title": "X",
            "url": "https://x.test",
            "description": ""
        }),
    );
    let (status, _) = json_response(&app, create).await;
    assert_eq!(status, StatusCode::CREATED);

    let body = list(&app).await;
    let tools = &body["linkCategories"][1];
    assert_eq!(tools["name"], "Tools");
    assert_eq!(tools["links"][0]["rowIndex"], 1);

    let update = json_request(
        "PUT",
        "/api/links",
        json!({
            "rowIndex": 1,
            "category": "Tools",
            "title": "Y",
            "url": "https://y.test",
            "description": "renamed"
        }),
    );
    let (status, _) = json_response(&app, update).await;
    assert_eq!(status, StatusCode::OK);

    let body = list(&app).await;
    assert_eq!(body["linkCategories"][1]["links"][0]["title"], "Y");
    assert_eq!(body["linkCategories"][1]["links"][0]["description"], "renamed");

    let delete = json_request("DELETE", "/api/links", json!({ "rowIndex": 1 }));
    let (status, _) = json_response(&app, delete).await;
    assert_eq!(status, StatusCode::OK);

    let body = list(&app).await;
    let categories = body["linkCategories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Dev");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _store) = seeded_app(Vec::new()).await;

    let (status, body) = json_response(&app, get_links("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "linkshelf");
}
