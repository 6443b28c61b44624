use serde::{Deserialize, Serialize};

use super::errors::FieldError;
use super::link::{Category, Link, LinkId};

/// Unsaved state of the add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: Category,
    /// Id of the link being edited; `None` while creating a new one.
    pub editing: Option<LinkId>,
}

impl Draft {
    /// Copies a stored link's fields into a draft that targets it.
    pub fn from_link(link: &Link) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
            description: link.description.clone().unwrap_or_default(),
            category: link.category,
            editing: Some(link.id.clone()),
        }
    }
}

/// A single draft field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Url(String),
    Description(String),
    Category(Category),
}

impl DraftField {
    /// Builds a field update from its form name and raw value.
    pub fn parse(name: &str, value: &str) -> Result<Self, FieldError> {
        match name {
            "title" => Ok(DraftField::Title(value.to_string())),
            "url" => Ok(DraftField::Url(value.to_string())),
            "description" => Ok(DraftField::Description(value.to_string())),
            "category" => Ok(DraftField::Category(value.parse()?)),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title(_) => "title",
            DraftField::Url(_) => "url",
            DraftField::Description(_) => "description",
            DraftField::Category(_) => "category",
        }
    }
}
