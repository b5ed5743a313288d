//! Scroll-triggered reveal.
//!
//! Elements marked `.animate-on-scroll` get the `animated` class the first
//! time they enter the viewport and are then unobserved; the CSS owns the
//! actual animation. Without `IntersectionObserver` everything is revealed
//! immediately.

/// Elements to reveal.
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";

/// Class added on reveal.
pub const REVEALED_CLASS: &str = "animated";

/// Fraction of the element that must be visible.
pub const THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so elements reveal slightly after they appear.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(feature = "hydrate")]
pub fn init(document: &web_sys::Document) -> Result<(), crate::error::PageError> {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::util::dom;

    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }
    if !dom::supports_intersection_observer(&dom::window()?) {
        for target in &targets {
            target.class_list().add_1(REVEALED_CLASS)?;
        }
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                log::warn!("reveal failed: {}", carousel::dom::describe_js(&err));
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    init.set_root_margin(ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("scroll reveal observing {} elements", targets.len());
    Ok(())
}
