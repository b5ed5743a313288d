//! Start-up: read config, then initialize each enabled module.
//!
//! Modules are independent. A module that fails to initialize is logged and
//! skipped; the rest of the page still gets its behavior.

use crate::components::carousel_host::{self, CarouselHost};
use crate::components::{accessibility, lazy_images, parallax, ripple, scroll_animator, smooth_scroll};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::error::PageError;
use crate::util::dom::{self, report};
use crate::util::motion;

/// Everything mounted on the page. Lives for the page session.
pub struct App {
    _carousels: Vec<CarouselHost>,
}

/// Config from the page's JSON block, or defaults.
fn read_config(document: &web_sys::Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("page config ignored: {err}");
        PageConfig::default()
    })
}

/// Initialize every enabled module against the current document.
pub fn init() -> Result<App, PageError> {
    let document = dom::document()?;
    let config = read_config(&document);

    let reduced_motion = motion::prefers_reduced_motion();
    report("reduced motion", motion::apply(&document, reduced_motion));

    if config.accessibility {
        report("accessibility", accessibility::init(&document, &config.main_content_id));
    }
    if config.lazy_images {
        report("lazy images", lazy_images::init(&document));
    }
    if config.scroll_animations {
        report("scroll animations", scroll_animator::init(&document));
    }
    if config.ripple {
        report("ripple", ripple::init(&document));
    }
    if config.smooth_scroll {
        report("smooth scroll", smooth_scroll::init(&document, &config.header_selector));
    }
    if config.parallax && !reduced_motion {
        report("parallax", parallax::init(&document));
    }

    let carousels = if config.carousels {
        carousel_host::init(&document, reduced_motion).unwrap_or_else(|err| {
            log::error!("carousels: {err}");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    log::info!("page ready: {} carousel(s), reduced motion {}", carousels.len(), reduced_motion);
    Ok(App { _carousels: carousels })
}
