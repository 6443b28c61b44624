use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::FieldError;

/// Opaque identifier of a stored link. Assigned once, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The fixed set of link categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Profile,
    Favorites,
    Books,
    Social,
    Work,
    #[default]
    Other,
}

impl Category {
    /// Every category, in the order groups are rendered.
    pub const ALL: [Category; 6] = [
        Category::Profile,
        Category::Favorites,
        Category::Books,
        Category::Social,
        Category::Work,
        Category::Other,
    ];

    /// Wire name, as used in JSON and form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Profile => "profile",
            Category::Favorites => "favorites",
            Category::Books => "books",
            Category::Social => "social",
            Category::Work => "work",
            Category::Other => "other",
        }
    }

    /// Human-readable heading for the category's group.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Profile => "Profile Links",
            Category::Favorites => "Favorites",
            Category::Books => "Books & Reading",
            Category::Social => "Social Media",
            Category::Work => "Work & Projects",
            Category::Other => "Other Links",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FieldError::UnknownCategory(s.to_string()))
    }
}

/// A saved link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
}

impl Link {
    pub fn new(
        id: impl Into<LinkId>,
        title: impl Into<String>,
        url: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            description: None,
            category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
