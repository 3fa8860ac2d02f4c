//! Error types for loading box trees

use thiserror::Error;

/// Errors that can occur when reading a box tree description
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read box tree file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse box tree TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two boxes share an id
    #[error("duplicate box id '{id}'")]
    DuplicateId { id: String },

    /// A box names a parent that is never declared
    #[error("box '{id}' refers to unknown parent '{parent}'")]
    UnknownParent {
        id: String,
        parent: String,
        suggestions: Vec<String>,
    },
}

impl LoadError {
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn unknown_parent(
        id: impl Into<String>,
        parent: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self::UnknownParent {
            id: id.into(),
            parent: parent.into(),
            suggestions,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownParent { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}
