//! Parallax layers.
//!
//! `.parallax` elements translate vertically by `scrollY * speed`, where the
//! speed comes from `data-speed`. Scroll events only request a frame; the
//! transform is written at most once per animation frame.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

pub const PARALLAX_SELECTOR: &str = ".parallax";

pub const SPEED_ATTRIBUTE: &str = "data-speed";

pub const DEFAULT_SPEED: f64 = 0.5;

/// Speed from the attribute value; missing, unparsable, or non-finite values
/// use [`DEFAULT_SPEED`].
#[must_use]
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_SPEED)
}

/// Transform for a layer at the given scroll position.
#[must_use]
pub fn layer_transform(scroll_y: f64, speed: f64) -> String {
    format!("translate3d(0, {}px, 0)", scroll_y * speed)
}

#[cfg(feature = "hydrate")]
pub fn init(document: &web_sys::Document) -> Result<(), crate::error::PageError> {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::HtmlElement;

    use crate::util::dom::{self, Listener};

    let layers: Vec<(HtmlElement, f64)> = dom::query_all(document, PARALLAX_SELECTOR)?
        .into_iter()
        .filter_map(|el| {
            let speed = parse_speed(el.get_attribute(SPEED_ATTRIBUTE).as_deref());
            el.dyn_into::<HtmlElement>().ok().map(|el| (el, speed))
        })
        .collect();
    if layers.is_empty() {
        return Ok(());
    }

    let window = dom::window()?;
    let frame_pending = Rc::new(Cell::new(false));

    let frame = {
        let window = window.clone();
        let frame_pending = Rc::clone(&frame_pending);
        Closure::wrap(Box::new(move |_ts: f64| {
            frame_pending.set(false);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            for (layer, speed) in &layers {
                if let Err(err) = layer.style().set_property("transform", &layer_transform(scroll_y, *speed)) {
                    log::warn!("parallax: {}", carousel::dom::describe_js(&err));
                }
            }
        }) as Box<dyn FnMut(f64)>)
    };

    let scroll_window = window.clone();
    let listener = Listener::passive(window.as_ref(), "scroll", move |_| {
        if frame_pending.get() {
            return;
        }
        frame_pending.set(true);
        if let Err(err) = scroll_window.request_animation_frame(frame.as_ref().unchecked_ref()) {
            frame_pending.set(false);
            log::warn!("parallax frame request failed: {}", carousel::dom::describe_js(&err));
        }
    })?;
    listener.forget();
    Ok(())
}
