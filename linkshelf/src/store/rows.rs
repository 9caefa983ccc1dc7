//! Row shape of the worksheet and the fold from rows into categories.
//!
//! Each cell is addressed by its header label. A field may sit under its
//! human-readable label (`Category`) or under the generic positional label
//! (`col1`); reads accept both, writes always use the human-readable one.

use std::collections::HashMap;

use shared_types::{Link, LinkCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Title,
    Url,
    Description,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Category, Field::Title, Field::Url, Field::Description];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Category => "Category",
            Field::Title => "Title",
            Field::Url => "URL",
            Field::Description => "Description",
        }
    }

    pub fn generic_label(&self) -> &'static str {
        match self {
            Field::Category => "col1",
            Field::Title => "col2",
            Field::Url => "col3",
            Field::Description => "col4",
        }
    }
}

/// One worksheet row as header-label → cell value pairs, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCells {
    cells: Vec<(String, String)>,
}

impl RowCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair a header row with a data row. Cells past the header are dropped;
    /// missing trailing cells read as empty.
    pub fn from_header(header: &[String], values: &[String]) -> Self {
        let cells = header
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), values.get(i).cloned().unwrap_or_default()))
            .collect();
        Self { cells }
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(label, value);
        self
    }

    pub fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, cell)) => *cell = value,
            None => self.cells.push((label, value)),
        }
    }

    /// Non-empty value under an exact header label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Non-empty value of a field, human-readable label first.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.label())
            .or_else(|| self.get(field.generic_label()))
    }

    /// Overwrite the four fields under their human-readable labels.
    pub fn apply(&mut self, row: &SheetRow) {
        for field in Field::ALL {
            self.set(field.label(), row.value(field));
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(label, _)| label.as_str())
    }
}

/// The four link fields of one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub category: String,
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SheetRow {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Category => &self.category,
            Field::Title => &self.title,
            Field::Url => &self.url,
            Field::Description => &self.description,
        }
    }

    pub fn to_cells(&self) -> RowCells {
        let mut cells = RowCells::new();
        cells.apply(self);
        cells
    }
}

/// Group rows into categories.
///
/// Categories appear in first-seen order and keep row order inside. A
/// category's description comes from the first row carrying its label. Rows
/// missing a category, title or url are skipped but still count toward the
/// positions of the rows after them.
pub fn group_rows(rows: &[RowCells]) -> Vec<LinkCategory> {
    let mut categories: Vec<LinkCategory> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for (position, row) in rows.iter().enumerate() {
        let (Some(category), Some(title), Some(url)) = (
            row.field(Field::Category),
            row.field(Field::Title),
            row.field(Field::Url),
        ) else {
            continue;
        };
        let description = row.field(Field::Description).unwrap_or_default();

        let slot = *by_name.entry(category).or_insert_with(|| {
            categories.push(LinkCategory {
                name: category.to_string(),
                description: description.to_string(),
                links: Vec::new(),
            });
            categories.len() - 1
        });

        categories[slot].links.push(Link {
            title: title.to_string(),
            url: url.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            row_index: Some(position),
        });
    }

    categories
}
