use serde::Serialize;

use super::{Component, UiComponent};

/// Generic container; owns its children in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiBox {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<u8>,
    children: Vec<Component>,
}

impl UiBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            span: None,
            children: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: u8) -> Self {
        self.span = Some(span);
        self
    }

    pub fn span(&self) -> Option<u8> {
        self.span
    }

    pub fn add_child(&mut self, child: impl Into<Component>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }
}

impl UiComponent for UiBox {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Vertical container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VBox {
    inner: UiBox,
}

impl VBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: UiBox::new(label),
        }
    }

    pub fn add_child(&mut self, child: impl Into<Component>) {
        self.inner.add_child(child);
    }

    pub fn children(&self) -> &[Component] {
        self.inner.children()
    }
}

impl UiComponent for VBox {
    fn label(&self) -> &str {
        self.inner.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{TabNavigator, UiComponent};

    #[test]
    fn add_child_keeps_order() {
        let mut vbox = VBox::new("root");
        vbox.add_child(UiBox::new("first"));
        vbox.add_child(TabNavigator::new("second"));

        let labels: Vec<_> = vbox.children().iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["first", "second"]);
        assert_eq!(vbox.label(), "root");
    }

    #[test]
    fn nested_boxes_own_their_children() {
        let mut inner = UiBox::new("inner").with_span(6);
        inner.add_child(TabNavigator::new("tabs"));
        let mut outer = UiBox::new("outer");
        outer.add_child(inner);

        let child = &outer.children()[0];
        assert_eq!(child.kind(), "Box");
        assert_eq!(child.children()[0].label(), "tabs");
    }
}
