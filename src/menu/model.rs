use tracing::{debug, warn};

use crate::discovery::ServiceSource;
use crate::error::Result;
use crate::menu::spec::{MenuItem, MenuSpec};
use crate::menu::Menu;

/// A menu fed from a service source, plus what is needed to present it.
pub struct MenuModel {
    menu: Menu,
    skipped: usize,
    raw: Option<String>,
}

impl MenuModel {
    /// Feeds services into a fresh menu until it reports itself complete.
    ///
    /// Without an explicit `limit` the menu expects one call per discovered
    /// service.
    pub fn load(source: &dyn ServiceSource, limit: Option<usize>) -> Result<Self> {
        let listing = source.list_services()?;
        let limit = limit.unwrap_or(listing.services.len());
        let mut menu = Menu::new(limit);

        let mut fed = 0;
        for service in &listing.services {
            fed += 1;
            if menu.init(service, service.invokable_members()) {
                break;
            }
        }

        let skipped = listing.services.len() - fed;
        if skipped > 0 {
            warn!(skipped, limit, "menu limit reached before all services were fed");
        }
        if !menu.is_complete() {
            debug!(count = menu.count(), limit, "menu still waiting for services");
        }

        Ok(Self {
            menu,
            skipped,
            raw: listing.raw,
        })
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Services left unfed because the limit was reached first.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The services document as read, when the source keeps one.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn menu_spec(&self) -> Result<MenuSpec> {
        let mut items = Vec::new();

        for (i, title) in self.menu.unique_menu_titles()?.into_iter().enumerate() {
            if i > 0 {
                items.push(MenuItem::Separator);
            }
            let entries = self.menu.find_entries_by_title(&title);
            items.push(MenuItem::Header(title));
            for me in entries {
                items.push(MenuItem::Action {
                    id: me.item_id.clone(),
                    title: me.action.id.clone(),
                    href: me.action.href.clone(),
                    enabled: me.action.is_enabled(),
                });
            }
        }

        Ok(MenuSpec::new(items))
    }
}
