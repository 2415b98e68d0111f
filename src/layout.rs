//! Declarative layout descriptors and how they turn into components.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ViewError};
use crate::view::VBox;

mod col;

pub use col::{ColLayout, TabGroupLayout, TabLayout};

pub const COLS_LAYOUT_LABEL: &str = "ColsLayout/tab";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColsLayout {
    #[serde(default)]
    pub col: Option<ColLayout>,
}

impl ColsLayout {
    pub fn new(col: ColLayout) -> Self {
        Self { col: Some(col) }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ViewError::json("ColsLayout", e))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ViewError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| ViewError::json(path.display().to_string(), e))
    }

    /// Wraps the built column in a `VBox`; a missing column is an error.
    pub fn build(&self) -> Result<VBox> {
        let col = self
            .col
            .as_ref()
            .ok_or_else(|| ViewError::missing_field("col", "ColsLayout"))?;
        let mut result = VBox::new(COLS_LAYOUT_LABEL);
        result.add_child(col.build());
        debug!(label = COLS_LAYOUT_LABEL, "built cols layout");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Component, UiComponent};

    #[test]
    fn build_without_col_fails() {
        let err = ColsLayout::default().build().unwrap_err();
        assert!(matches!(
            err,
            ViewError::MissingField { ref field, .. } if field == "col"
        ));
    }

    #[test]
    fn build_wraps_single_column() {
        let col = ColLayout {
            id: Some("left".to_string()),
            ..ColLayout::default()
        };
        let expected = Component::Box(col.build());

        let vbox = ColsLayout::new(col).build().unwrap();
        assert_eq!(vbox.label(), "ColsLayout/tab");
        assert_eq!(vbox.children(), [expected]);
    }

    #[test]
    fn from_json_without_col_parses_then_fails_to_build() {
        let layout = ColsLayout::from_json("{}").unwrap();
        assert!(layout.col.is_none());
        assert!(layout.build().is_err());
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = ColsLayout::from_json(r#"{"col": 5}"#).unwrap_err();
        assert!(matches!(err, ViewError::Json { .. }));
    }
}
