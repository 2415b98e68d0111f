use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSpec {
    pub items: Vec<MenuItem>,
}

impl MenuSpec {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            MenuItem::Header(title) => Some(title.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Header(String),
    Separator,
    Action {
        /// Owning service id; what `Menu::find_action` is queried with.
        id: Option<String>,
        title: String,
        href: Option<String>,
        enabled: bool,
    },
}
