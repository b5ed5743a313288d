//! Page-wide live region for short screen-reader announcements.
//!
//! One region per page, created on first [`init`] and reused afterwards.
//! Each announcement replaces the previous one and is cleared after
//! [`CLEAR_AFTER_MS`]. Only the most recent announcement's clear timer is
//! live, so an older timer can never wipe a newer message.
//!
//! Announcing before [`init`] is a logged no-op.

#[cfg(test)]
#[path = "announcer_test.rs"]
mod announcer_test;

/// Delay before an announcement is cleared.
pub const CLEAR_AFTER_MS: u32 = 1000;

/// Id given to the live region element.
pub const LIVE_REGION_ID: &str = "live-region";

/// The single pending announcement, tagged with a generation so expired
/// clears are recognized.
#[derive(Debug, Default)]
pub struct AnnouncementSlot {
    text: Option<String>,
    generation: u64,
}

impl AnnouncementSlot {
    /// Replace the pending text. Returns the generation a later clear must present.
    pub fn post(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.text = Some(text.into());
        self.generation
    }

    /// Clear the slot if `generation` is still current. Returns whether it cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{OnceCell, RefCell};

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use super::{AnnouncementSlot, CLEAR_AFTER_MS, LIVE_REGION_ID};
    use crate::error::PageError;

    struct LiveRegion {
        element: HtmlElement,
        slot: AnnouncementSlot,
        clear: Option<Timeout>,
    }

    thread_local! {
        static LIVE_REGION: OnceCell<RefCell<LiveRegion>> = const { OnceCell::new() };
    }

    /// Create (or adopt) the live region. Later calls are no-ops.
    pub fn init(document: &Document) -> Result<(), PageError> {
        if LIVE_REGION.with(|cell| cell.get().is_some()) {
            return Ok(());
        }
        let element = match document.get_element_by_id(LIVE_REGION_ID) {
            Some(existing) => existing,
            None => {
                let created = document.create_element("div")?;
                created.set_id(LIVE_REGION_ID);
                document.body().ok_or(PageError::NoDocument)?.append_child(&created)?;
                created
            }
        };
        element.set_attribute("role", "status")?;
        element.set_attribute("aria-live", "polite")?;
        element.set_attribute("aria-atomic", "true")?;
        element.class_list().add_1("sr-only")?;
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Dom("live region is not an HTML element".to_owned()))?;

        let region = RefCell::new(LiveRegion { element, slot: AnnouncementSlot::default(), clear: None });
        LIVE_REGION.with(|cell| {
            if cell.set(region).is_err() {
                log::debug!("live region already initialized");
            }
        });
        Ok(())
    }

    /// Post `text`, replacing any pending announcement and its clear timer.
    pub fn announce(text: &str) {
        LIVE_REGION.with(|cell| {
            let Some(region) = cell.get() else {
                log::debug!("announce before live region init: {text}");
                return;
            };
            let mut region = region.borrow_mut();
            region.element.set_text_content(Some(text));
            let generation = region.slot.post(text);
            region.clear = Some(Timeout::new(CLEAR_AFTER_MS, move || expire(generation)));
        });
    }

    fn expire(generation: u64) {
        LIVE_REGION.with(|cell| {
            let Some(region) = cell.get() else {
                return;
            };
            let mut region = region.borrow_mut();
            if region.slot.expire(generation) {
                region.element.set_text_content(None);
                region.clear = None;
            }
        });
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{announce, init};
