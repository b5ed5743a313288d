//! Material-style ripple on button clicks.
//!
//! One delegated click listener on the document. The ripple is a `span`
//! sized to the button's larger side, centered on the click, and removed
//! once its CSS animation has run.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Elements that ripple when clicked.
pub const RIPPLE_SELECTOR: &str = ".btn";

/// Class of the injected span.
pub const RIPPLE_CLASS: &str = "ripple";

/// Lifetime of a ripple span; matches the CSS animation.
pub const RIPPLE_MS: u32 = 600;

/// Bounding box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and position of a ripple relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple for a click at (`client_x`, `client_y`) inside `rect`.
    #[must_use]
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Inline style for the span.
    #[must_use]
    pub fn style(&self) -> String {
        format!("width:{0}px;height:{0}px;left:{1}px;top:{2}px", self.size, self.left, self.top)
    }
}

#[cfg(feature = "hydrate")]
pub fn init(document: &web_sys::Document) -> Result<(), crate::error::PageError> {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::MouseEvent;

    use crate::util::dom::{self, Listener};

    let doc = document.clone();
    let listener = Listener::new(document.as_ref(), "click", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(button) = dom::event_element(&event).and_then(|el| el.closest(RIPPLE_SELECTOR).ok().flatten()) else {
            return;
        };
        let bounds = button.get_bounding_client_rect();
        let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
        let ripple = Ripple::at(rect, f64::from(mouse.client_x()), f64::from(mouse.client_y()));

        let span = match doc.create_element("span") {
            Ok(span) => span,
            Err(err) => {
                log::warn!("ripple: {}", carousel::dom::describe_js(&err));
                return;
            }
        };
        span.set_class_name(RIPPLE_CLASS);
        let attached = span
            .set_attribute("style", &ripple.style())
            .and_then(|()| button.append_child(&span).map(|_| ()));
        if let Err(err) = attached {
            log::warn!("ripple: {}", carousel::dom::describe_js(&err));
            return;
        }
        Timeout::new(RIPPLE_MS, move || span.remove()).forget();
    })?;
    listener.forget();
    Ok(())
}
