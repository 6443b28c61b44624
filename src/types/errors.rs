use thiserror::Error;

// === ValidationError ===

/// Raised by form submission when required fields are missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title is empty.
    #[error("Title is required")]
    MissingTitle,
    /// The URL is empty.
    #[error("URL is required")]
    MissingUrl,
    /// Both title and URL are empty.
    #[error("Title and URL are required")]
    MissingTitleAndUrl,
}

impl ValidationError {
    /// Names of the missing fields, in form order.
    pub fn missing_fields(&self) -> &'static [&'static str] {
        match self {
            ValidationError::MissingTitle => &["title"],
            ValidationError::MissingUrl => &["url"],
            ValidationError::MissingTitleAndUrl => &["title", "url"],
        }
    }
}

// === FieldError ===

/// Errors from mapping raw form input onto a draft field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The form has no field with this name.
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    /// The value is not one of the fixed categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

// === LinkError ===

/// Errors from looking up a stored link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Link with the given ID was not found.
    #[error("Link not found: {0}")]
    NotFound(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
