//! Single-page navigation between a fixed set of sections.
//!
//! Exactly one section is active in normal operation. Following a link runs
//! the whole transition: every section and menu item is cleared, then the
//! target section and the link's menu item (if any) are marked active. A link
//! whose target is not a known section leaves no section active.

use log::{debug, warn};

/// Section id of the landing page.
pub const HOME_SECTION: &str = "home";
/// Section id of the metrics dashboard.
pub const DASHBOARD_SECTION: &str = "dashboard";

/// A clickable link: an in-page target plus the menu item it sits in, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: String,
    pub menu_item: Option<String>,
}

impl NavLink {
    /// Link from an `href` such as `#dashboard`.
    pub fn from_href(href: &str, menu_item: Option<&str>) -> Self {
        Self {
            target: href.strip_prefix('#').unwrap_or(href).to_string(),
            menu_item: menu_item.map(str::to_string),
        }
    }

    /// A link inside the navigation menu item `menu_item`.
    pub fn menu(href: &str, menu_item: &str) -> Self {
        Self::from_href(href, Some(menu_item))
    }

    /// A call-to-action link outside the navigation menu.
    pub fn call_to_action(href: &str) -> Self {
        Self::from_href(href, None)
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Outcome of following a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `section` is now the only active section; the container should scroll to its top.
    Activated { section: String },
    /// The target matched no section; every section is now inactive.
    Cleared { target: String },
}

impl Transition {
    pub fn scroll_to_top(&self) -> bool {
        matches!(self, Transition::Activated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    sections: Vec<String>,
    menu_items: Vec<String>,
    active_section: Option<String>,
    active_menu_item: Option<String>,
}

impl Navigator {
    /// A navigator over `sections` and `menu_items` with nothing active yet.
    pub fn new<S, M>(sections: S, menu_items: M) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            menu_items: menu_items.into_iter().map(Into::into).collect(),
            active_section: None,
            active_menu_item: None,
        }
    }

    /// Set the initial state as marked up in the page. Unknown ids are ignored.
    pub fn with_active(mut self, section: &str, menu_item: Option<&str>) -> Self {
        self.active_section = self.known_section(section);
        self.active_menu_item = menu_item.and_then(|item| self.known_menu_item(item));
        self
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn menu_items(&self) -> &[String] {
        &self.menu_items
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn active_menu_item(&self) -> Option<&str> {
        self.active_menu_item.as_deref()
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }

    pub fn is_menu_item_active(&self, menu_item: &str) -> bool {
        self.active_menu_item.as_deref() == Some(menu_item)
    }

    /// Follow `link`, updating section and menu highlighting.
    pub fn follow(&mut self, link: &NavLink) -> Transition {
        self.active_section = self.known_section(&link.target);
        self.active_menu_item = link
            .menu_item
            .as_deref()
            .and_then(|item| self.known_menu_item(item));

        match &self.active_section {
            Some(section) => {
                debug!("Navigated to #{section}");
                Transition::Activated {
                    section: section.clone(),
                }
            }
            None => {
                warn!("No section matches #{}; all sections hidden", link.target);
                Transition::Cleared {
                    target: link.target.clone(),
                }
            }
        }
    }

    fn known_section(&self, id: &str) -> Option<String> {
        self.sections.iter().find(|s| *s == id).cloned()
    }

    fn known_menu_item(&self, id: &str) -> Option<String> {
        self.menu_items.iter().find(|m| *m == id).cloned()
    }
}
