use serde::Serialize;

use super::UiComponent;

/// Leaf component holding a set of tabs; attributes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabNavigator {
    label: String,
    pub percent_width: u8,
    pub percent_height: u8,
    pub tab_focus_enabled: bool,
    pub tabs: Vec<String>,
}

impl TabNavigator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            percent_width: 100,
            percent_height: 100,
            tab_focus_enabled: true,
            tabs: Vec::new(),
        }
    }
}

impl UiComponent for TabNavigator {
    fn label(&self) -> &str {
        &self.label
    }
}
