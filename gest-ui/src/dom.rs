//! Browser DOM adapter.
//!
//! `DomView` writes dashboard slots by element id. A slot whose element is
//! absent from the document is reported as `ViewError::MissingSlot`.

use gest_core::error::ViewError;
use gest_core::view::{DashboardView, Slot};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub struct DomView {
    document: Document,
}

impl DomView {
    /// View over the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        document().map(|document| Self { document })
    }

    fn element(&self, slot: Slot) -> Result<Element, ViewError> {
        self.document
            .get_element_by_id(slot.id())
            .ok_or(ViewError::MissingSlot(slot))
    }
}

impl DashboardView for DomView {
    fn set_text(&mut self, slot: Slot, text: &str) -> Result<(), ViewError> {
        self.element(slot)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_progress_width(&mut self, percent: u8) -> Result<(), ViewError> {
        let slot = Slot::ProgressFill;
        let fill = self
            .element(slot)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewError::Dom {
                slot,
                reason: "not an HTML element".to_string(),
            })?;
        fill.style()
            .set_property("width", &format!("{percent}%"))
            .map_err(|e| ViewError::Dom {
                slot,
                reason: format!("{e:?}"),
            })
    }
}

/// Smoothly scroll the first element matching `selector` to its top.
pub fn scroll_to_top(selector: &str) {
    let container =
        document().and_then(|document| document.query_selector(selector).ok().flatten());
    match container {
        Some(container) => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            container.scroll_to_with_scroll_to_options(&options);
        }
        None => warn!("No element matches {selector}; not scrolling"),
    }
}
