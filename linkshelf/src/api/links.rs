//! Link repository endpoints.
//!
//! Each handler opens the worksheet afresh and re-reads the rows it needs;
//! nothing is cached between requests. `rowIndex` is checked against the row
//! count read during the same request.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shared_types::{
    CreateLinkRequest, DeleteLinkRequest, ListLinksResponse, MutationResponse, UpdateLinkRequest,
};

use crate::api::error::ApiError;
use crate::api::ApiState;
use crate::store::{group_rows, SheetRow};

/// `GET /links`
pub async fn list_links(
    State(state): State<ApiState>,
) -> Result<Json<ListLinksResponse>, ApiError> {
    const ACTION: &str = "Failed to fetch links";

    let sheet = state.connector.connect().await.map_err(ApiError::store(ACTION))?;
    let rows = sheet.rows().await.map_err(ApiError::store(ACTION))?;
    let link_categories = group_rows(&rows);

    tracing::debug!(
        worksheet = sheet.title(),
        rows = rows.len(),
        categories = link_categories.len(),
        "listed links"
    );
    Ok(Json(ListLinksResponse { link_categories }))
}

/// `POST /links`
pub async fn create_link(
    State(state): State<ApiState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    const ACTION: &str = "Failed to add link";

    let Json(req) = payload?;
    if !req.has_required_fields() {
        return Err(ApiError::bad_request(
            "Missing required fields: category, title, url",
        ));
    }

    let sheet = state.connector.connect().await.map_err(ApiError::store(ACTION))?;
    let row = SheetRow::new(req.category, req.title, req.url, req.description);
    sheet
        .append_row(&row)
        .await
        .map_err(ApiError::store(ACTION))?;

    tracing::info!(category = %row.category, title = %row.title, "link added");
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            success: true,
            message: "Link added successfully".to_string(),
        }),
    ))
}

/// `PUT /links`
pub async fn update_link(
    State(state): State<ApiState>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    const ACTION: &str = "Failed to update link";

    let Json(req) = payload?;
    let Some(row_index) = req.row_index.filter(|_| req.has_required_fields()) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let sheet = state.connector.connect().await.map_err(ApiError::store(ACTION))?;
    let rows = sheet.rows().await.map_err(ApiError::store(ACTION))?;
    let position = checked_position(row_index, rows.len())?;

    let row = SheetRow::new(req.category, req.title, req.url, req.description);
    sheet
        .update_row(position, &row)
        .await
        .map_err(ApiError::store(ACTION))?;

    tracing::info!(position, category = %row.category, title = %row.title, "link updated");
    Ok(Json(MutationResponse {
        success: true,
        message: "Link updated successfully".to_string(),
    }))
}

/// `DELETE /links`
pub async fn delete_link(
    State(state): State<ApiState>,
    payload: Result<Json<DeleteLinkRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    const ACTION: &str = "Failed to delete link";

    let Json(req) = payload?;
    let Some(row_index) = req.row_index else {
        return Err(ApiError::bad_request("Missing rowIndex"));
    };

    let sheet = state.connector.connect().await.map_err(ApiError::store(ACTION))?;
    let rows = sheet.rows().await.map_err(ApiError::store(ACTION))?;
    let position = checked_position(row_index, rows.len())?;

    sheet
        .delete_row(position)
        .await
        .map_err(ApiError::store(ACTION))?;

    tracing::info!(position, "link deleted");
    Ok(Json(MutationResponse {
        success: true,
        message: "Link deleted successfully".to_string(),
    }))
}

/// `row_index` must address one of the `len` rows just read.
fn checked_position(row_index: i64, len: usize) -> Result<usize, ApiError> {
    usize::try_from(row_index)
        .ok()
        .filter(|position| *position < len)
        .ok_or(ApiError::InvalidRowIndex)
}
