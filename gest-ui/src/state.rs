//! Page-wide state: the section navigator and the startup error.
//!
//! Provided once by the app root; the menu and page components read it to
//! decide which section is visible and call `AppState::follow` on clicks.

use crate::dom;
use dioxus::prelude::*;
use gest_core::navigation::{NavLink, Navigator, DASHBOARD_SECTION, HOME_SECTION};

/// Menu item id wrapping the home link.
pub const NAV_HOME: &str = "nav-home";
/// Menu item id wrapping the dashboard link.
pub const NAV_DASHBOARD: &str = "nav-dashboard";

/// Selector of the scrollable page container.
pub const CONTAINER_SELECTOR: &str = ".container";

#[derive(Clone, Copy)]
pub struct AppState {
    /// Which page section and menu item are active
    pub navigator: Signal<Navigator>,
    /// Error message if startup failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with the home page active.
    pub fn new() -> Self {
        let navigator = Navigator::new(
            [HOME_SECTION, DASHBOARD_SECTION],
            [NAV_HOME, NAV_DASHBOARD],
        )
        .with_active(HOME_SECTION, Some(NAV_HOME));

        Self {
            navigator: Signal::new(navigator),
            error_msg: Signal::new(None),
        }
    }

    /// Follow a link and scroll the container back to the top when a page was shown.
    pub fn follow(&mut self, link: &NavLink) {
        let transition = self.navigator.write().follow(link);
        if transition.scroll_to_top() {
            dom::scroll_to_top(CONTAINER_SELECTOR);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
