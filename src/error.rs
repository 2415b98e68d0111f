use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while aggregating menus or building layout trees.
#[derive(Error, Debug)]
pub enum ViewError {
    /// A layout descriptor lacks a child it cannot be built without.
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// A menu entry carries no title where one is needed.
    #[error("Menu entry {index} has no title")]
    MissingTitle { index: usize },

    #[error("JSON error in {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ViewError>;

impl ViewError {
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
