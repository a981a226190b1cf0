//! Dashboard section holding every display slot.

use super::{page_class, page_style, MetricCard, ProgressBar};
use crate::state::AppState;
use dioxus::prelude::*;
use gest_core::navigation::DASHBOARD_SECTION;
use gest_core::view::Slot;

/// Dashboard section. Slot elements are rendered empty and filled by the
/// renderer through the DOM at startup.
#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<AppState>();
    let active = state.navigator.read().is_active(DASHBOARD_SECTION);

    let value_style = "font-size: 32px; font-weight: bold; color: #AD1457;";
    let text_style = "font-size: 18px; color: #444;";

    rsx! {
        section {
            id: DASHBOARD_SECTION,
            class: page_class(active),
            style: page_style(active),
            h2 {
                style: "margin: 0 0 16px 0; color: #880E4F;",
                "Pregnancy Dashboard"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px;",

                MetricCard {
                    title: "Gestational Age".to_string(),
                    div {
                        span { id: Slot::WeeksCurrent.id(), style: value_style }
                        span { style: text_style, " w " }
                        span { id: Slot::DaysCurrent.id(), style: value_style }
                        span { style: text_style, " d" }
                    }
                    p { id: Slot::AgeText.id(), style: text_style }
                }

                MetricCard {
                    title: "Countdown".to_string(),
                    caption: "days until the due date".to_string(),
                    div { id: Slot::CountdownDays.id(), style: value_style }
                    p { id: Slot::EddDate.id(), style: text_style }
                }

                MetricCard {
                    title: "Trimester".to_string(),
                    div { id: Slot::TrimesterInfo.id(), style: text_style }
                }

                MetricCard {
                    title: "Baby Size".to_string(),
                    caption: "about the size of".to_string(),
                    div { id: Slot::BabySize.id(), style: text_style }
                }
            }

            div {
                style: "margin-top: 16px;",
                MetricCard {
                    title: "Progress".to_string(),
                    div { id: Slot::ProgressPercentage.id(), style: value_style }
                    ProgressBar {}
                    p { id: Slot::ProgressText.id(), style: text_style }
                }
            }
        }
    }
}
