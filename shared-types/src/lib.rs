//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the axum link repository API (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP. Field names are camelCase on
//! the wire (`linkCategories`, `rowIndex`).

use serde::{Deserialize, Deserializer, Serialize};

pub mod draft;
pub mod fallback;
pub mod view;

pub use draft::{LinkDraft, REQUIRED_FIELDS_NOTICE};
pub use fallback::fallback_categories;
pub use view::{
    remote_row_for, reselect_category, LinkView, RowAction, ViewSource, LOCAL_DELETE_NOTICE,
    LOCAL_EDIT_NOTICE,
};

// ============================================================================
// Core Types
// ============================================================================

/// A single bookmark.
///
/// `row_index` is the position of the backing row in the remote worksheet as
/// of the last list fetch. It is not a stable identifier: any mutation can
/// shift the rows after it. Links from the fallback dataset carry no index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<usize>,
}

impl Link {
    /// A display-only link with no remote row behind it.
    pub fn local(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            row_index: None,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.row_index.is_some()
    }
}

/// A named grouping of links. Identity is the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

// ============================================================================
// API Types
// ============================================================================

/// `GET /links` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListLinksResponse {
    #[serde(default)]
    pub link_categories: Vec<LinkCategory>,
}

/// `POST /links` body. Missing fields deserialize as empty strings and are
/// rejected by the required-field check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl CreateLinkRequest {
    pub fn has_required_fields(&self) -> bool {
        has_required_fields(&self.category, &self.title, &self.url)
    }
}

/// `PUT /links` body
///
/// `row_index` is signed so that a negative index reaches the bounds check
/// instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(default, deserialize_with = "whole_row_index")]
    pub row_index: Option<i64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateLinkRequest {
    pub fn has_required_fields(&self) -> bool {
        self.row_index.is_some() && has_required_fields(&self.category, &self.title, &self.url)
    }
}

/// `DELETE /links` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLinkRequest {
    #[serde(default, deserialize_with = "whole_row_index")]
    pub row_index: Option<i64>,
}

/// `rowIndex` as a whole number; `1` and `1.0` both read as row 1.
fn whole_row_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(D::Error::custom(format!(
            "rowIndex must be a whole number, got {value}"
        )));
    }
    Ok(Some(value as i64))
}

/// Success body for create/update/delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

/// Error body for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// The most specific message available: `details` when set, else `error`.
    pub fn message(&self) -> &str {
        self.details
            .as_deref()
            .filter(|details| !details.is_empty())
            .unwrap_or(&self.error)
    }
}

fn has_required_fields(category: &str, title: &str, url: &str) -> bool {
    !category.is_empty() && !title.is_empty() && !url.is_empty()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_serializes_camel_case_and_skips_missing_fields() {
        let remote = Link {
            title: "Docs".to_string(),
            url: "https://docs.rs".to_string(),
            description: None,
            row_index: Some(3),
        };
        let value = serde_json::to_value(&remote).unwrap();
        assert_eq!(
            value,
            json!({ "title": "Docs", "url": "https://docs.rs", "rowIndex": 3 })
        );

        let local = serde_json::to_value(Link::local("Docs", "https://docs.rs")).unwrap();
        assert!(local.get("rowIndex").is_none());
        assert!(local.get("description").is_none());
    }

    #[test]
    fn test_list_response_uses_link_categories_key() {
        let body = ListLinksResponse::default();
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"linkCategories":[]}"#);
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let req: CreateLinkRequest =
            serde_json::from_value(json!({ "category": "Tools", "url": "https://x.test" }))
                .unwrap();
        assert_eq!(req.title, "");
        assert_eq!(req.description, "");
        assert!(!req.has_required_fields());
    }

    #[test]
    fn test_update_request_requires_row_index() {
        let req: UpdateLinkRequest = serde_json::from_value(json!({
            "category": "Tools",
            "title": "X",
            "url": "https://x.test"
        }))
        .unwrap();
        assert!(!req.has_required_fields());

        let req = UpdateLinkRequest {
            row_index: Some(0),
            ..req
        };
        assert!(req.has_required_fields());
    }

    #[test]
    fn test_negative_row_index_deserializes() {
        let req: DeleteLinkRequest = serde_json::from_value(json!({ "rowIndex": -1 })).unwrap();
        assert_eq!(req.row_index, Some(-1));
    }

    #[test]
    fn test_integral_float_row_index_deserializes() {
        let req: DeleteLinkRequest = serde_json::from_value(json!({ "rowIndex": 2.0 })).unwrap();
        assert_eq!(req.row_index, Some(2));

        let req: DeleteLinkRequest = serde_json::from_value(json!({ "rowIndex": null })).unwrap();
        assert_eq!(req.row_index, None);

        assert!(serde_json::from_value::<DeleteLinkRequest>(json!({ "rowIndex": 1.5 })).is_err());
    }

    #[test]
    fn test_error_response_prefers_details() {
        let err = ErrorResponse {
            error: "Failed to add link".to_string(),
            details: Some("quota exceeded".to_string()),
        };
        assert_eq!(err.message(), "quota exceeded");

        let err = ErrorResponse {
            error: "Invalid row index".to_string(),
            details: None,
        };
        assert_eq!(err.message(), "Invalid row index");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "error": "Invalid row index" })
        );
    }
}
