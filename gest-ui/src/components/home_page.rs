//! Landing page section.

use super::{page_class, page_style};
use crate::state::AppState;
use dioxus::prelude::*;
use gest_core::navigation::{NavLink, DASHBOARD_SECTION, HOME_SECTION};

/// Welcome section with a call-to-action link to the dashboard.
#[component]
pub fn HomePage() -> Element {
    let mut state = use_context::<AppState>();
    let active = state.navigator.read().is_active(HOME_SECTION);
    let cta = NavLink::call_to_action(DASHBOARD_SECTION);
    let href = cta.href();

    rsx! {
        section {
            id: HOME_SECTION,
            class: page_class(active),
            style: page_style(active),
            h1 {
                style: "margin: 0 0 8px 0; color: #880E4F;",
                "Our Little One Is On The Way"
            }
            p {
                style: "color: #555; max-width: 560px;",
                "Follow along week by week: how far along we are, how many days are left, and how big the baby is right now."
            }
            div {
                class: "call-to-action",
                style: "margin-top: 16px;",
                a {
                    href: "{href}",
                    style: "display: inline-block; padding: 10px 18px; background: #D81B60; color: #FFFFFF; border-radius: 20px; text-decoration: none;",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        state.follow(&cta);
                    },
                    "See the dashboard"
                }
            }
        }
    }
}
