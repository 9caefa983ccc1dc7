use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use shared_types::{
    CreateLinkRequest, DeleteLinkRequest, ErrorResponse, LinkCategory, ListLinksResponse,
    UpdateLinkRequest,
};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn links_url() -> String {
    format!("{}/api/links", api_base())
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message_from_body(status, &body)
}

/// The server's most specific message (`details`, then `error`), falling back
/// to the status code.
fn error_message_from_body(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(error) = serde_json::from_str::<ErrorResponse>(body) {
        return error.message().to_string();
    }
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

async fn send_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<(), String> {
    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }
    Ok(())
}

// ============================================================================
// Link API Functions
// ============================================================================

pub async fn fetch_links() -> Result<Vec<LinkCategory>, String> {
    let response = Request::get(&links_url())
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ListLinksResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    Ok(data.link_categories)
}

pub async fn create_link(request: &CreateLinkRequest) -> Result<(), String> {
    send_json(Request::post(&links_url()), request).await
}

pub async fn update_link(request: &UpdateLinkRequest) -> Result<(), String> {
    send_json(Request::put(&links_url()), request).await
}

pub async fn delete_link(row_index: usize) -> Result<(), String> {
    let request = DeleteLinkRequest {
        row_index: Some(row_index as i64),
    };
    send_json(Request::delete(&links_url()), &request).await
}
