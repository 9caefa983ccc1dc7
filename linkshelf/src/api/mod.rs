//! HTTP API routes for Linkshelf
//!
//! The link repository is mounted at `/links` and again under `/api/links`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

pub mod error;
pub mod links;

pub use error::ApiError;

use crate::store::SheetConnector;

#[derive(Clone)]
pub struct ApiState {
    pub connector: Arc<dyn SheetConnector>,
}

impl ApiState {
    pub fn new(connector: Arc<dyn SheetConnector>) -> Self {
        Self { connector }
    }
}

/// Configure all API routes
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health_check))
        .merge(link_routes())
        .nest("/api", link_routes())
}

fn link_routes() -> Router<ApiState> {
    Router::new().route(
        "/links",
        get(links::list_links)
            .post(links::create_link)
            .put(links::update_link)
            .delete(links::delete_link),
    )
}

/// Health check endpoint
pub async fn health_check(State(_state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "linkshelf",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
