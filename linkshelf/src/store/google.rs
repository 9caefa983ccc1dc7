//! Google Sheets v4 row store.
//!
//! Authenticates as a service account (RS256 JWT assertion exchanged for a
//! bearer token), resolves the worksheet from the document metadata and maps
//! data rows to positions. Row 1 of the worksheet is the header; position `p`
//! lives on sheet row `p + 2`.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Field, RowCells, SheetConnector, SheetRow, StoreError, Worksheet};
use crate::config::SheetConfig;

const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    #[serde(default)]
    sheet_id: i64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Connector for one spreadsheet document.
#[derive(Debug, Clone)]
pub struct GoogleSheets {
    http: reqwest::Client,
    config: SheetConfig,
}

impl GoogleSheets {
    pub fn new(config: SheetConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("linkshelf/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    async fn access_token(&self) -> Result<String, StoreError> {
        let account = &self.config.account;
        if account.client_email.is_empty() {
            return Err(StoreError::MissingCredentials("GOOGLE_SERVICE_ACCOUNT_EMAIL"));
        }
        if account.private_key.is_empty() {
            return Err(StoreError::MissingCredentials("GOOGLE_PRIVATE_KEY"));
        }

        let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
            .map_err(|e| StoreError::Auth(format!("invalid private key: {e}")))?;
        let now = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &account.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.config.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| StoreError::Auth(format!("failed to sign assertion: {e}")))?;

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                error_message(&body)
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(format!("token response: {e}")))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SheetConnector for GoogleSheets {
    async fn connect(&self) -> Result<Box<dyn Worksheet>, StoreError> {
        let token = self.access_token().await?;
        let endpoints = Endpoints {
            api_base: self.config.api_base.clone(),
            spreadsheet_id: self.config.sheet_id.clone(),
        };

        let mut url = endpoints.spreadsheet(None)?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(sheetId,title)");
        let response = self
            .http
            .get(url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(transport)?;
        let meta: SpreadsheetMeta = check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Parse(format!("spreadsheet metadata: {e}")))?;

        let properties = resolve_worksheet(meta.sheets, &self.config.sheet_name)?;
        tracing::debug!(
            title = %properties.title,
            sheet_id = properties.sheet_id,
            "resolved worksheet"
        );

        Ok(Box::new(GoogleWorksheet {
            http: self.http.clone(),
            token,
            endpoints,
            sheet_id: properties.sheet_id,
            title: properties.title,
        }))
    }
}

fn resolve_worksheet(
    sheets: Vec<SheetEntry>,
    sheet_name: &str,
) -> Result<SheetProperties, StoreError> {
    let mut sheets: Vec<SheetProperties> = sheets.into_iter().map(|s| s.properties).collect();
    let index = sheets
        .iter()
        .position(|sheet| sheet.title == sheet_name)
        .unwrap_or(0);
    if sheets.is_empty() {
        return Err(StoreError::SheetNotFound);
    }
    Ok(sheets.swap_remove(index))
}

#[derive(Debug, Clone)]
struct Endpoints {
    api_base: String,
    spreadsheet_id: String,
}

impl Endpoints {
    /// `{base}/spreadsheets/{id}{suffix}`
    fn spreadsheet(&self, suffix: Option<&str>) -> Result<Url, StoreError> {
        let segment = format!("{}{}", self.spreadsheet_id, suffix.unwrap_or_default());
        self.build(&["spreadsheets", &segment])
    }

    /// `{base}/spreadsheets/{id}/values/{range}{suffix}`
    fn values(&self, range: &str, suffix: Option<&str>) -> Result<Url, StoreError> {
        let segment = format!("{range}{}", suffix.unwrap_or_default());
        self.build(&["spreadsheets", &self.spreadsheet_id, "values", &segment])
    }

    fn build(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| StoreError::Transport(format!("invalid Sheets API base: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Transport("Sheets API base cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// A1 range on a worksheet, quoting the title.
fn a1_range(title: &str, cells: Option<&str>) -> String {
    let quoted = format!("'{}'", title.replace('\'', "''"));
    match cells {
        Some(cells) => format!("{quoted}!{cells}"),
        None => quoted,
    }
}

struct GoogleWorksheet {
    http: reqwest::Client,
    token: String,
    endpoints: Endpoints,
    sheet_id: i64,
    title: String,
}

impl GoogleWorksheet {
    async fn read(&self, cells: Option<&str>) -> Result<Vec<Vec<String>>, StoreError> {
        let mut url = self.endpoints.values(&a1_range(&self.title, cells), None)?;
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;
        let range: ValueRange = check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Parse(format!("value range: {e}")))?;
        Ok(range.values)
    }

    async fn write(&self, cells: &str, values: Vec<Vec<String>>) -> Result<(), StoreError> {
        let mut url = self
            .endpoints
            .values(&a1_range(&self.title, Some(cells)), None)?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": values }))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }

    /// Make sure every human-readable label has a header column, appending
    /// the missing ones at the end of row 1. Existing header cells are
    /// written back as they were.
    async fn ensure_header(&self, mut header: Vec<String>) -> Result<Vec<String>, StoreError> {
        let missing: Vec<String> = Field::ALL
            .iter()
            .map(|field| field.label())
            .filter(|label| column_of(&header, label).is_none())
            .map(String::from)
            .collect();
        if missing.is_empty() {
            return Ok(header);
        }

        header.extend(missing);
        self.write("A1", vec![header.clone()]).await?;
        Ok(header)
    }
}

/// Row 1 as stored, untrimmed.
fn header_of(grid: &[Vec<String>]) -> Vec<String> {
    grid.first().cloned().unwrap_or_default()
}

fn trimmed_labels(header: &[String]) -> Vec<String> {
    header.iter().map(|cell| cell.trim().to_string()).collect()
}

/// First column whose trimmed header label is `label`.
fn column_of(header: &[String], label: &str) -> Option<usize> {
    header.iter().position(|cell| cell.trim() == label)
}

/// Lay a row out along the header by column. Only the columns of the four
/// human-readable labels change; every other cell keeps its value.
fn layout(header: &[String], existing: &[String], row: &SheetRow) -> Vec<String> {
    let mut values: Vec<String> = (0..header.len())
        .map(|column| existing.get(column).cloned().unwrap_or_default())
        .collect();
    for field in Field::ALL {
        if let Some(column) = column_of(header, field.label()) {
            values[column] = row.value(field).to_string();
        }
    }
    values
}

#[async_trait]
impl Worksheet for GoogleWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    async fn rows(&self) -> Result<Vec<RowCells>, StoreError> {
        let grid = self.read(None).await?;
        let header = trimmed_labels(&header_of(&grid));
        Ok(grid
            .iter()
            .skip(1)
            .map(|values| RowCells::from_header(&header, values))
            .collect())
    }

    async fn append_row(&self, row: &SheetRow) -> Result<(), StoreError> {
        let header = header_of(&self.read(Some("1:1")).await?);
        let header = self.ensure_header(header).await?;
        let values = layout(&header, &[], row);

        let mut url = self
            .endpoints
            .values(&a1_range(&self.title, Some("A1")), Some(":append"))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": [values] }))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }

    async fn update_row(&self, position: usize, row: &SheetRow) -> Result<(), StoreError> {
        let grid = self.read(None).await?;
        let len = grid.len().saturating_sub(1);
        let existing = grid
            .get(position + 1)
            .ok_or(StoreError::RowOutOfRange { position, len })?;
        let header = self.ensure_header(header_of(&grid)).await?;
        let values = layout(&header, existing, row);

        self.write(&format!("A{}", position + 2), vec![values]).await
    }

    async fn delete_row(&self, position: usize) -> Result<(), StoreError> {
        let start = position + 1;
        let url = self.endpoints.spreadsheet(Some(":batchUpdate"))?;
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&json!({
                "requests": [{
                    "deleteDimension": {
                        "range": {
                            "sheetId": self.sheet_id,
                            "dimension": "ROWS",
                            "startIndex": start,
                            "endIndex": start + 1,
                        }
                    }
                }]
            }))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Http {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Google errors arrive as `{"error": {"message": ...}}` or
/// `{"error": "...", "error_description": ...}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    let error = &value["error"];
    error["message"]
        .as_str()
        .or_else(|| value["error_description"].as_str())
        .or_else(|| error.as_str())
        .map(String::from)
        .unwrap_or_else(|| body.trim().to_string())
}
