//! Error types for the prompt document model.
//!
//! Validation findings are plain data (see [`crate::validation`]); these errors
//! cover editing and (de)serialization failures only.

use thiserror::Error;

/// Result type alias for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors that can occur while editing or loading a prompt document.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Index out of bounds for list operations (shots, dialogue, sound effects).
    #[error("Index {index} out of bounds for {list} of length {length}")]
    IndexOutOfBounds {
        list: &'static str,
        index: usize,
        length: usize,
    },

    /// A settings value outside the supported enumeration.
    #[error("Unsupported {setting}: {value}")]
    UnsupportedSetting {
        setting: &'static str,
        value: String,
    },

    /// Field not found on an editable item.
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// No built-in template with this id.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PromptError {
    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(list: &'static str, index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds {
            list,
            index,
            length,
        }
    }

    /// Creates an UnsupportedSetting error.
    pub fn unsupported_setting(setting: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedSetting {
            setting,
            value: value.into(),
        }
    }

    /// Creates a FieldNotFound error.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound(field.into())
    }

    /// Creates a TemplateNotFound error.
    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound(id.into())
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
