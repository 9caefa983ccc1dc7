//! Client-side view of the link list.
//!
//! Two sources feed the view: the remote list and the built-in fallback.
//! Remote wins whenever it has at least one category; otherwise the fallback
//! replaces it wholesale. Fields are never mixed across sources.

use crate::fallback::fallback_categories;
use crate::{Link, LinkCategory};

pub const LOCAL_DELETE_NOTICE: &str =
    "Cannot delete local links. Please add links from Google Sheet.";
pub const LOCAL_EDIT_NOTICE: &str = "Cannot edit local links. Please add links from Google Sheet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub source: ViewSource,
    pub categories: Vec<LinkCategory>,
    /// Name of the selected category
    pub selected: Option<String>,
}

impl LinkView {
    /// Build the view shown after the first list fetch.
    ///
    /// `remote` is whatever the list call produced; a failed call is passed
    /// as an empty list.
    pub fn initial(remote: Vec<LinkCategory>) -> Self {
        let (source, categories) = if remote.is_empty() {
            (ViewSource::Fallback, fallback_categories())
        } else {
            (ViewSource::Remote, remote)
        };
        let selected = categories.first().map(|category| category.name.clone());
        Self {
            source,
            categories,
            selected,
        }
    }

    /// Replace the view with a fresh remote list after a mutation.
    ///
    /// The previous selection survives if a category of that name still
    /// exists; otherwise the first category is selected.
    pub fn apply_refresh(&mut self, categories: Vec<LinkCategory>) {
        self.selected = reselect_category(self.selected.as_deref(), &categories);
        self.categories = categories;
        self.source = ViewSource::Remote;
    }

    /// Pure client-side selection. Unknown names are ignored.
    pub fn select(&mut self, name: &str) {
        if self.categories.iter().any(|category| category.name == name) {
            self.selected = Some(name.to_string());
        }
    }

    pub fn selected_category(&self) -> Option<&LinkCategory> {
        let name = self.selected.as_deref()?;
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| category.name.clone())
            .collect()
    }
}

pub fn reselect_category(previous: Option<&str>, categories: &[LinkCategory]) -> Option<String> {
    previous
        .and_then(|name| categories.iter().find(|category| category.name == name))
        .or_else(|| categories.first())
        .map(|category| category.name.clone())
}

/// Row position to target for a remote edit or delete.
///
/// Links without a row index came from the fallback dataset; the returned
/// error is the notice to show instead of issuing any request.
pub fn remote_row_for(link: &Link, action: RowAction) -> Result<usize, &'static str> {
    link.row_index.ok_or(match action {
        RowAction::Edit => LOCAL_EDIT_NOTICE,
        RowAction::Delete => LOCAL_DELETE_NOTICE,
    })
}
