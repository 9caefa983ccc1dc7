//! Form state for adding or editing a link.

use crate::{CreateLinkRequest, LinkCategory, UpdateLinkRequest};

pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    /// Existing category picked from the select; empty when none is picked.
    pub category: String,
    /// Free-text category typed while no existing category is picked.
    pub custom_category: String,
    pub title: String,
    pub url: String,
    pub description: String,
    /// Row being edited; `None` for a new link.
    pub row_index: Option<usize>,
}

impl LinkDraft {
    /// Prefill the form from an existing remote link.
    pub fn editing(category: &LinkCategory, link_index: usize) -> Option<Self> {
        let link = category.links.get(link_index)?;
        Some(Self {
            category: category.name.clone(),
            custom_category: String::new(),
            title: link.title.clone(),
            url: link.url.clone(),
            description: link.description.clone().unwrap_or_default(),
            row_index: link.row_index,
        })
    }

    pub fn is_edit(&self) -> bool {
        self.row_index.is_some()
    }

    /// A typed custom category wins over the select.
    pub fn effective_category(&self) -> &str {
        if self.custom_category.is_empty() {
            &self.category
        } else {
            &self.custom_category
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.effective_category().is_empty() || self.title.is_empty() || self.url.is_empty() {
            return Err(REQUIRED_FIELDS_NOTICE);
        }
        Ok(())
    }

    pub fn to_create_request(&self) -> CreateLinkRequest {
        CreateLinkRequest {
            category: self.effective_category().to_string(),
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
        }
    }

    pub fn to_update_request(&self) -> Option<UpdateLinkRequest> {
        let row_index = self.row_index?;
        Some(UpdateLinkRequest {
            row_index: Some(row_index as i64),
            category: self.effective_category().to_string(),
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
        })
    }
}
