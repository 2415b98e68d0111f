//! Plain-text presentation of component trees and menus.

use super::{Component, UiComponent};
use crate::menu::spec::{MenuItem, MenuSpec};

/// One line per node, children indented by two spaces.
pub fn outline(root: &Component) -> String {
    let mut out = String::new();
    outline_into(root, 0, &mut out);
    out
}

fn outline_into(node: &Component, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let line = match node {
        Component::Box(b) => match b.span() {
            Some(span) => format!("{indent}Box \"{}\" span={span}\n", b.label()),
            None => format!("{indent}Box \"{}\"\n", b.label()),
        },
        Component::VBox(v) => format!("{indent}VBox \"{}\"\n", v.label()),
        Component::TabNavigator(t) => format!(
            "{indent}TabNavigator \"{}\" {}%x{}% tabs=[{}]\n",
            t.label(),
            t.percent_width,
            t.percent_height,
            t.tabs.join(", ")
        ),
    };
    out.push_str(&line);
    for child in node.children() {
        outline_into(child, depth + 1, out);
    }
}

pub fn menu(spec: &MenuSpec) -> String {
    let mut out = String::new();
    for item in &spec.items {
        let line = match item {
            MenuItem::Header(title) => format!("{title}\n"),
            MenuItem::Separator => "----\n".to_string(),
            MenuItem::Action {
                id, title, enabled, ..
            } => {
                let suffix = if *enabled { "" } else { " (disabled)" };
                format!("  {title} [{}]{suffix}\n", id.as_deref().unwrap_or("<none>"))
            }
        };
        out.push_str(&line);
    }
    out
}
