//! Top navigation menu.

use crate::state::{AppState, NAV_DASHBOARD, NAV_HOME};
use dioxus::prelude::*;
use gest_core::navigation::{NavLink, DASHBOARD_SECTION, HOME_SECTION};

/// Navigation bar with one item per page section.
#[component]
pub fn NavMenu() -> Element {
    rsx! {
        nav {
            style: "position: sticky; top: 0; background: #FCE4EC; border-bottom: 1px solid #F8BBD0; padding: 0 16px;",
            ul {
                class: "nav-menu",
                style: "list-style: none; display: flex; gap: 8px; margin: 0; padding: 0;",
                NavItem { item_id: NAV_HOME.to_string(), target: HOME_SECTION.to_string(), label: "Home".to_string() }
                NavItem { item_id: NAV_DASHBOARD.to_string(), target: DASHBOARD_SECTION.to_string(), label: "Dashboard".to_string() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavItemProps {
    /// Id of the `li` menu item
    item_id: String,
    /// Section the link points at
    target: String,
    label: String,
}

#[component]
fn NavItem(props: NavItemProps) -> Element {
    let mut state = use_context::<AppState>();
    let active = state.navigator.read().is_menu_item_active(&props.item_id);
    let link = NavLink::menu(&props.target, &props.item_id);
    let href = link.href();

    let (class, style) = if active {
        ("active", "padding: 12px 10px; border-bottom: 3px solid #D81B60; font-weight: bold;")
    } else {
        ("", "padding: 12px 10px; border-bottom: 3px solid transparent;")
    };

    rsx! {
        li {
            id: "{props.item_id}",
            class: "{class}",
            style: "{style}",
            a {
                href: "{href}",
                style: "color: #880E4F; text-decoration: none;",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    state.follow(&link);
                },
                "{props.label}"
            }
        }
    }
}
