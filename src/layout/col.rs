use serde::Deserialize;

use crate::view::{TabNavigator, UiBox};

const DEFAULT_SPAN: u8 = 12;

fn default_span() -> u8 {
    DEFAULT_SPAN
}

/// A single column: an optional id, a grid span and its tab groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColLayout {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_span")]
    pub span: u8,
    #[serde(default)]
    pub tab_group: Vec<TabGroupLayout>,
}

impl Default for ColLayout {
    fn default() -> Self {
        Self {
            id: None,
            span: DEFAULT_SPAN,
            tab_group: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TabGroupLayout {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tab: Vec<TabLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabLayout {
    pub name: String,
}

impl ColLayout {
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("ColLayout")
    }

    /// One `TabNavigator` per tab group, inside a box carrying the span.
    pub fn build(&self) -> UiBox {
        let label = self.label();
        let mut result = UiBox::new(label).with_span(self.span);
        for (i, group) in self.tab_group.iter().enumerate() {
            let nav_label = match group.name.as_deref() {
                Some(name) => name.to_string(),
                None => format!("{label}/tabGroup{i}"),
            };
            let mut nav = TabNavigator::new(nav_label);
            nav.tabs = group.tab.iter().map(|t| t.name.clone()).collect();
            result.add_child(nav);
        }
        result
    }
}
