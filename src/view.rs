//! Renderable component tree produced from layout descriptors.

use serde::Serialize;

pub mod container;
pub mod render;
pub mod tab_navigator;

pub use container::{UiBox, VBox};
pub use tab_navigator::TabNavigator;

pub trait UiComponent {
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    Box(UiBox),
    VBox(VBox),
    TabNavigator(TabNavigator),
}

impl Component {
    pub fn children(&self) -> &[Component] {
        match self {
            Component::Box(b) => b.children(),
            Component::VBox(v) => v.children(),
            Component::TabNavigator(_) => &[],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Component::Box(_) => "Box",
            Component::VBox(_) => "VBox",
            Component::TabNavigator(_) => "TabNavigator",
        }
    }
}

impl UiComponent for Component {
    fn label(&self) -> &str {
        match self {
            Component::Box(b) => b.label(),
            Component::VBox(v) => v.label(),
            Component::TabNavigator(t) => t.label(),
        }
    }
}

impl From<UiBox> for Component {
    fn from(b: UiBox) -> Self {
        Component::Box(b)
    }
}

impl From<VBox> for Component {
    fn from(v: VBox) -> Self {
        Component::VBox(v)
    }
}

impl From<TabNavigator> for Component {
    fn from(t: TabNavigator) -> Self {
        Component::TabNavigator(t)
    }
}
