//! Lazy image loading.
//!
//! `img[data-src]` elements keep their real address in `data-src` until they
//! first come near the viewport. Loading copies it to `src`, drops the
//! marker, and stops observing the image, so each image loads exactly once
//! and is never reverted.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

/// Attribute carrying the deferred source.
pub const PENDING_ATTRIBUTE: &str = "data-src";

/// Images still waiting to load.
pub const LAZY_SELECTOR: &str = "img[data-src]";

/// Class added once the real source is set.
pub const LOADED_CLASS: &str = "loaded";

/// Start loading slightly before the image scrolls into view.
pub const ROOT_MARGIN: &str = "50px 0px";

/// Source to load for an image whose pending marker is `pending`.
///
/// Blank markers load nothing; once the marker is removed the image is no
/// longer pending and this returns `None`.
#[must_use]
pub fn pending_source(pending: Option<&str>) -> Option<&str> {
    pending.map(str::trim).filter(|src| !src.is_empty())
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{LAZY_SELECTOR, LOADED_CLASS, PENDING_ATTRIBUTE, ROOT_MARGIN, pending_source};
    use crate::error::PageError;
    use crate::util::dom;

    /// Swap in the real source. Idempotent: a loaded image has no marker left.
    fn load(image: &Element) -> Result<(), PageError> {
        let pending = image.get_attribute(PENDING_ATTRIBUTE);
        let Some(src) = pending_source(pending.as_deref()) else {
            return Ok(());
        };
        image.set_attribute("src", src)?;
        image.remove_attribute(PENDING_ATTRIBUTE)?;
        image.class_list().add_1(LOADED_CLASS)?;
        Ok(())
    }

    pub fn init(document: &Document) -> Result<(), PageError> {
        let images = dom::query_all(document, LAZY_SELECTOR)?;
        if images.is_empty() {
            return Ok(());
        }
        if !dom::supports_intersection_observer(&dom::window()?) {
            for image in &images {
                dom::report("lazy image", load(image));
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
                let image = entry.target();
                dom::report("lazy image", load(&image));
                observer.unobserve(&image);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for image in &images {
            observer.observe(image);
        }
        log::debug!("lazy loading {} images", images.len());
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;
