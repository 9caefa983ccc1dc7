//! In-process worksheet store for local development and tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{RowCells, SheetConnector, SheetRow, StoreError, Worksheet};

#[derive(Debug, Clone)]
struct Tab {
    title: String,
    rows: Vec<RowCells>,
}

/// A spreadsheet document held in memory.
///
/// Worksheet resolution matches the remote store: the tab titled
/// `sheet_name`, else the first tab, else not found.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    sheet_name: String,
    tabs: Arc<Mutex<Vec<Tab>>>,
}

impl MemoryStore {
    /// A document with one empty worksheet named `sheet_name`.
    pub fn new(sheet_name: impl Into<String>) -> Self {
        let sheet_name = sheet_name.into();
        let tabs = vec![Tab {
            title: sheet_name.clone(),
            rows: Vec::new(),
        }];
        Self {
            sheet_name,
            tabs: Arc::new(Mutex::new(tabs)),
        }
    }

    /// A document with no worksheets at all.
    pub fn without_worksheets(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            tabs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a worksheet after the existing ones.
    pub async fn add_worksheet(&self, title: impl Into<String>, rows: Vec<RowCells>) {
        self.tabs.lock().await.push(Tab {
            title: title.into(),
            rows,
        });
    }

    /// Append raw rows to the resolved worksheet.
    pub async fn seed(&self, rows: impl IntoIterator<Item = RowCells>) -> Result<(), StoreError> {
        let mut tabs = self.tabs.lock().await;
        let index = resolve(&tabs, &self.sheet_name)?;
        tabs[index].rows.extend(rows);
        Ok(())
    }

    /// Current rows of the resolved worksheet.
    pub async fn snapshot(&self) -> Result<Vec<RowCells>, StoreError> {
        let tabs = self.tabs.lock().await;
        let index = resolve(&tabs, &self.sheet_name)?;
        Ok(tabs[index].rows.clone())
    }
}

fn resolve(tabs: &[Tab], sheet_name: &str) -> Result<usize, StoreError> {
    tabs.iter()
        .position(|tab| tab.title == sheet_name)
        .or(if tabs.is_empty() { None } else { Some(0) })
        .ok_or(StoreError::SheetNotFound)
}

#[async_trait]
impl SheetConnector for MemoryStore {
    async fn connect(&self) -> Result<Box<dyn Worksheet>, StoreError> {
        let tabs = self.tabs.lock().await;
        let index = resolve(&tabs, &self.sheet_name)?;
        Ok(Box::new(MemoryWorksheet {
            title: tabs[index].title.clone(),
            index,
            tabs: Arc::clone(&self.tabs),
        }))
    }
}

struct MemoryWorksheet {
    title: String,
    index: usize,
    tabs: Arc<Mutex<Vec<Tab>>>,
}

#[async_trait]
impl Worksheet for MemoryWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    async fn rows(&self) -> Result<Vec<RowCells>, StoreError> {
        let tabs = self.tabs.lock().await;
        Ok(tabs[self.index].rows.clone())
    }

    async fn append_row(&self, row: &SheetRow) -> Result<(), StoreError> {
        let mut tabs = self.tabs.lock().await;
        tabs[self.index].rows.push(row.to_cells());
        Ok(())
    }

    async fn update_row(&self, position: usize, row: &SheetRow) -> Result<(), StoreError> {
        let mut tabs = self.tabs.lock().await;
        let rows = &mut tabs[self.index].rows;
        let len = rows.len();
        let cells = rows
            .get_mut(position)
            .ok_or(StoreError::RowOutOfRange { position, len })?;
        cells.apply(row);
        Ok(())
    }

    async fn delete_row(&self, position: usize) -> Result<(), StoreError> {
        let mut tabs = self.tabs.lock().await;
        let rows = &mut tabs[self.index].rows;
        if position >= rows.len() {
            return Err(StoreError::RowOutOfRange {
                position,
                len: rows.len(),
            });
        }
        rows.remove(position);
        Ok(())
    }
}
