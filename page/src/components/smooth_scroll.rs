//! Smooth scrolling for in-page anchors.
//!
//! A delegated click listener catches `a[href^="#"]`. When the fragment
//! names an element on the page, default navigation is replaced by a smooth
//! scroll that leaves the target clear of the fixed header, and focus moves
//! to the target so keyboard and screen-reader users land there too.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Links handled by this module.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id named by a same-page `href`, if any. A bare `#` names nothing.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Document scroll position that puts an element whose top is at
/// `target_top` (viewport coordinates) just below a header of
/// `header_height`, given the current `scroll_y`.
#[must_use]
pub fn scroll_destination(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (target_top + scroll_y - header_height).max(0.0)
}

#[cfg(feature = "hydrate")]
pub fn init(document: &web_sys::Document, header_selector: &str) -> Result<(), crate::error::PageError> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    use crate::util::dom::{self, Listener};

    let window = dom::window()?;
    let doc = document.clone();
    let header_selector = header_selector.to_owned();

    let listener = Listener::new(document.as_ref(), "click", move |event| {
        let Some(link) = dom::event_element(&event).and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten()) else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
            return;
        };
        event.prevent_default();

        let header_height = doc
            .query_selector(&header_selector)
            .ok()
            .flatten()
            .and_then(|h| h.dyn_into::<HtmlElement>().ok())
            .map_or(0.0, |h| f64::from(h.offset_height()));
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let top = scroll_destination(target.get_bounding_client_rect().top(), scroll_y, header_height);

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);

        if let Ok(target) = target.dyn_into::<HtmlElement>() {
            if !target.has_attribute("tabindex") {
                target.set_tab_index(-1);
            }
            if let Err(err) = target.focus() {
                log::debug!("smooth scroll focus: {}", carousel::dom::describe_js(&err));
            }
        }
    })?;
    listener.forget();
    Ok(())
}
