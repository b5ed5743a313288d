//! Page-level accessibility affordances.
//!
//! - A skip link to the main content, inserted when the markup lacks one.
//! - The shared live region (see [`crate::util::announcer`]).
//! - Keyboard focus mode: Tab puts `keyboard-navigation` on `<body>` so focus
//!   rings show; the next pointer press removes it.

#[cfg(test)]
#[path = "accessibility_test.rs"]
mod accessibility_test;

pub const SKIP_LINK_CLASS: &str = "skip-link";

pub const SKIP_LINK_TEXT: &str = "Skip to main content";

pub const KEYBOARD_CLASS: &str = "keyboard-navigation";

/// How the user is currently moving focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    Pointer,
    Keyboard,
}

impl FocusMode {
    /// Mode after a key press. Only Tab switches to keyboard mode.
    #[must_use]
    pub fn after_key(self, key: &str) -> Self {
        if key == "Tab" { Self::Keyboard } else { self }
    }

    /// Mode after a pointer press.
    #[must_use]
    pub fn after_pointer(self) -> Self {
        Self::Pointer
    }

    #[must_use]
    pub fn shows_focus_rings(self) -> bool {
        self == Self::Keyboard
    }
}

/// `href` for the skip link.
#[must_use]
pub fn skip_link_href(main_id: &str) -> String {
    format!("#{main_id}")
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, KeyboardEvent};

    use super::{FocusMode, KEYBOARD_CLASS, SKIP_LINK_CLASS, SKIP_LINK_TEXT, skip_link_href};
    use crate::error::PageError;
    use crate::util::announcer;
    use crate::util::dom::{self, Listener};

    pub fn init(document: &Document, main_id: &str) -> Result<(), PageError> {
        announcer::init(document)?;
        dom::report("skip link", ensure_skip_link(document, main_id));
        focus_mode(document)
    }

    fn ensure_skip_link(document: &Document, main_id: &str) -> Result<(), PageError> {
        if document.query_selector(&format!(".{SKIP_LINK_CLASS}"))?.is_some() {
            return Ok(());
        }
        let Some(main) = document.get_element_by_id(main_id) else {
            log::debug!("no #{main_id}; skip link not added");
            return Ok(());
        };
        // The target must accept focus for the skip to move the caret.
        if !main.has_attribute("tabindex") {
            main.set_attribute("tabindex", "-1")?;
        }

        let body = document.body().ok_or(PageError::NoDocument)?;
        let link = document.create_element("a")?;
        link.set_class_name(SKIP_LINK_CLASS);
        link.set_attribute("href", &skip_link_href(main_id))?;
        link.set_text_content(Some(SKIP_LINK_TEXT));
        body.insert_before(&link, body.first_child().as_ref())?;
        Ok(())
    }

    fn focus_mode(document: &Document) -> Result<(), PageError> {
        let body: HtmlElement = document.body().ok_or(PageError::NoDocument)?;
        let mode = Rc::new(Cell::new(FocusMode::default()));

        let apply = {
            let body = body.clone();
            move |mode: FocusMode| {
                if let Err(err) = body.class_list().toggle_with_force(KEYBOARD_CLASS, mode.shows_focus_rings()) {
                    log::warn!("focus mode: {}", carousel::dom::describe_js(&err));
                }
            }
        };

        let on_key = {
            let mode = Rc::clone(&mode);
            let apply = apply.clone();
            move |event: web_sys::Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let next = mode.get().after_key(&key.key());
                if next != mode.get() {
                    mode.set(next);
                    apply(next);
                }
            }
        };
        let on_pointer = move |_: web_sys::Event| {
            let next = mode.get().after_pointer();
            if next != mode.get() {
                mode.set(next);
                apply(next);
            }
        };

        Listener::new(document.as_ref(), "keydown", on_key)?.forget();
        Listener::new(document.as_ref(), "mousedown", on_pointer)?.forget();
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;
