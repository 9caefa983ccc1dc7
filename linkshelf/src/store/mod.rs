//! Row stores behind the link repository API.
//!
//! A connector opens one worksheet per request. Rows are addressed only by
//! their zero-based position in the list returned by `rows()`; a mutation
//! shifts the positions of the rows after it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, StoreBackend};

pub mod google;
pub mod memory;
pub mod rows;

pub use google::GoogleSheets;
pub use memory::MemoryStore;
pub use rows::{group_rows, Field, RowCells, SheetRow};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("missing service account setting: {0}")]
    MissingCredentials(&'static str),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("spreadsheet request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("spreadsheet transport error: {0}")]
    Transport(String),
    #[error("unexpected spreadsheet response: {0}")]
    Parse(String),
    #[error("Sheet not found")]
    SheetNotFound,
    #[error("row {position} out of range ({len} rows)")]
    RowOutOfRange { position: usize, len: usize },
}

/// Opens the configured worksheet.
///
/// Every call authenticates and resolves the worksheet from scratch.
#[async_trait]
pub trait SheetConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn Worksheet>, StoreError>;
}

/// A resolved worksheet.
#[async_trait]
pub trait Worksheet: Send + Sync {
    fn title(&self) -> &str;

    /// All data rows in store order. The header row is not included.
    async fn rows(&self) -> Result<Vec<RowCells>, StoreError>;

    async fn append_row(&self, row: &SheetRow) -> Result<(), StoreError>;

    /// Overwrite the four link fields of the row at `position`.
    async fn update_row(&self, position: usize, row: &SheetRow) -> Result<(), StoreError>;

    async fn delete_row(&self, position: usize) -> Result<(), StoreError>;
}

/// Build the connector selected by configuration.
pub fn connector_for(config: &Config) -> Result<Arc<dyn SheetConnector>, StoreError> {
    let connector: Arc<dyn SheetConnector> = match config.store {
        StoreBackend::Google => Arc::new(GoogleSheets::new(config.sheet.clone())?),
        StoreBackend::Memory => Arc::new(MemoryStore::new(&config.sheet.sheet_name)),
    };
    Ok(connector)
}
