use log::warn;
use web_sys::{
    window, Element, PopStateEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::error::PlatformError;
use crate::router::{HistoryState, Platform};

/// `Platform` backed by the real window, history and document.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPlatform;

impl Platform for WebPlatform {
    fn current_hash(&self) -> String {
        current_hash()
    }

    fn push_entry(&mut self, state: &HistoryState, url: &str) -> Result<(), PlatformError> {
        let window = window().ok_or(PlatformError::Unavailable("window"))?;
        let history = window.history()?;
        let payload = serde_wasm_bindgen::to_value(state)?;
        history.push_state_with_url(&payload, "", Some(url))?;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        match window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => warn!("no document to set title on"),
        }
    }
}

pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Reads the page state a `popstate` event carries back, if any.
pub fn history_state(event: &PopStateEvent) -> Option<HistoryState> {
    let state = event.state();
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state).ok()
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}
