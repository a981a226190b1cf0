//! Progress bar whose fill width is set by the renderer.

use dioxus::prelude::*;
use gest_core::view::Slot;

/// Empty track with the `progress-fill` slot inside.
///
/// The fill starts at zero width; the renderer sets it through the DOM once
/// metrics are computed.
#[component]
pub fn ProgressBar() -> Element {
    let fill_id = Slot::ProgressFill.id();

    rsx! {
        div {
            class: "progress-bar",
            style: "width: 100%; height: 14px; background: #F3E5EA; border-radius: 7px; overflow: hidden; margin: 8px 0;",
            div {
                id: "{fill_id}",
                class: "progress-fill",
                style: "width: 0%; height: 100%; background: linear-gradient(90deg, #F48FB1, #CE93D8);",
            }
        }
    }
}
