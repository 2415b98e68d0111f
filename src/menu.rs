use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ViewError};
use crate::to::{Member, Service};

pub mod model;
pub mod spec;

/// One (service, action) pairing as shown in the menu bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: Option<String>,
    pub item_id: Option<String>,
    pub action: Member,
}

impl MenuEntry {
    pub fn new(title: Option<String>, item_id: Option<String>, action: Member) -> Self {
        Self {
            title,
            item_id,
            action,
        }
    }
}

/// Accumulates menu entries from one `init` call per backend service.
///
/// `count` always equals the number of `init` calls and `menu_items` only
/// ever grows.
#[derive(Debug, Clone)]
pub struct Menu {
    limit: usize,
    count: usize,
    menu_items: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            count: 0,
            menu_items: Vec::new(),
        }
    }

    /// Appends one entry per member, all carrying the service's title and id.
    ///
    /// Returns `true` once the number of calls has reached the limit, which
    /// tells the caller to stop feeding services.
    pub fn init(&mut self, service: &Service, invokables: Vec<Member>) -> bool {
        let added = invokables.len();
        for m in invokables {
            let title = service.title.clone();
            let id = service.service_id.clone();
            self.menu_items.push(MenuEntry::new(title, id, m));
        }
        self.count += 1;
        debug!(
            service = service.service_id.as_deref().unwrap_or("<none>"),
            added,
            count = self.count,
            limit = self.limit,
            "menu init"
        );
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.count >= self.limit
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn menu_items(&self) -> &[MenuEntry] {
        &self.menu_items
    }

    pub fn len(&self) -> usize {
        self.menu_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menu_items.is_empty()
    }

    /// Distinct titles in order of first occurrence.
    pub fn unique_menu_titles(&self) -> Result<Vec<String>> {
        let mut titles: Vec<String> = Vec::new();
        for (index, me) in self.menu_items.iter().enumerate() {
            let title = me
                .title
                .as_deref()
                .ok_or(ViewError::MissingTitle { index })?;
            if !titles.iter().any(|t| t == title) {
                titles.push(title.to_string());
            }
        }
        Ok(titles)
    }

    pub fn find_entries_by_title(&self, title: &str) -> Vec<&MenuEntry> {
        self.menu_items
            .iter()
            .filter(|me| me.title.as_deref() == Some(title))
            .collect()
    }

    /// First action whose entry id equals `url`.
    pub fn find_action(&self, url: &str) -> Option<&Member> {
        self.menu_items
            .iter()
            .find(|me| me.item_id.as_deref() == Some(url))
            .map(|me| &me.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(title: Option<&str>, id: Option<&str>) -> Service {
        Service {
            title: title.map(str::to_string),
            service_id: id.map(str::to_string),
            members: Vec::new(),
        }
    }

    fn actions(ids: &[&str]) -> Vec<Member> {
        ids.iter().map(|id| Member::action(*id)).collect()
    }

    #[test]
    fn init_counts_calls_and_entries() {
        let mut menu = Menu::new(10);
        let s = service(Some("A"), Some("a"));
        menu.init(&s, actions(&["x", "y"]));
        menu.init(&s, Vec::new());
        menu.init(&s, actions(&["z"]));

        assert_eq!(menu.count(), 3);
        assert_eq!(menu.len(), 3);
        assert!(!menu.is_complete());
    }

    #[test]
    fn init_reports_limit_reached() {
        let mut menu = Menu::new(2);
        let s = service(Some("A"), Some("a"));
        assert!(!menu.init(&s, actions(&["x", "y", "z"])));
        assert!(menu.init(&s, Vec::new()));
        assert!(menu.init(&s, actions(&["w"])));
    }

    #[test]
    fn zero_limit_is_complete_after_first_call() {
        let mut menu = Menu::new(0);
        assert!(menu.is_complete());
        assert!(menu.init(&service(None, None), Vec::new()));
    }

    #[test]
    fn entries_take_service_title_and_id() {
        let mut menu = Menu::new(1);
        menu.init(&service(Some("Orders"), Some("orders")), actions(&["list", "find"]));

        for me in menu.menu_items() {
            assert_eq!(me.title.as_deref(), Some("Orders"));
            assert_eq!(me.item_id.as_deref(), Some("orders"));
        }
        assert_eq!(menu.menu_items()[1].action.id, "find");
    }

    #[test]
    fn unique_titles_preserve_first_occurrence() {
        let mut menu = Menu::new(4);
        for t in ["A", "B", "A", "C"] {
            menu.init(&service(Some(t), Some(t)), actions(&["act"]));
        }
        assert_eq!(menu.unique_menu_titles().unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn unique_titles_fail_on_missing_title() {
        let mut menu = Menu::new(2);
        menu.init(&service(Some("A"), Some("a")), actions(&["x"]));
        menu.init(&service(None, Some("b")), actions(&["y"]));

        let err = menu.unique_menu_titles().unwrap_err();
        assert!(matches!(err, ViewError::MissingTitle { index: 1 }));
    }

    #[test]
    fn untitled_service_without_members_is_harmless() {
        let mut menu = Menu::new(2);
        menu.init(&service(None, None), Vec::new());
        assert!(menu.unique_menu_titles().unwrap().is_empty());
    }

    #[test]
    fn find_entries_by_title_on_empty_menu() {
        let menu = Menu::new(1);
        assert!(menu.find_entries_by_title("X").is_empty());
    }

    #[test]
    fn find_entries_by_title_in_insertion_order() {
        let mut menu = Menu::new(3);
        menu.init(&service(Some("A"), Some("a1")), actions(&["one"]));
        menu.init(&service(Some("B"), Some("b")), actions(&["two"]));
        menu.init(&service(Some("A"), Some("a2")), actions(&["three"]));

        let ids: Vec<_> = menu
            .find_entries_by_title("A")
            .iter()
            .map(|me| me.action.id.as_str())
            .collect();
        assert_eq!(ids, ["one", "three"]);
    }

    #[test]
    fn find_action_returns_first_match() {
        let mut menu = Menu::new(2);
        menu.init(&service(Some("A"), Some("svc")), actions(&["first", "second"]));
        menu.init(&service(Some("B"), Some("other")), actions(&["third"]));

        assert_eq!(menu.find_action("svc").map(|m| m.id.as_str()), Some("first"));
        assert_eq!(menu.find_action("other").map(|m| m.id.as_str()), Some("third"));
        assert!(menu.find_action("missing").is_none());
    }
}
