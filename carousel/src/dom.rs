//! Mounted elements and the painter that applies a [`View`] to them.
//!
//! `CarouselElements` names every sub-element the carousel touches. Pages
//! normally build it with [`CarouselElements::discover`], which finds children
//! by class convention, but it can be assembled directly as well.

use std::num::NonZeroUsize;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCollection, HtmlElement, NodeList};

use crate::consts::{
    ACTIVE_CLASS, INDICATOR_SELECTOR, NEXT_SELECTOR, OPTIONS_ATTRIBUTE, PREV_SELECTOR, TRACK_SELECTOR,
};
use crate::options::{CarouselOptions, OptionsError};
use crate::view::{View, aria_bool};

/// Error returned when a container can't be mounted.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// A required child element was not found.
    #[error("carousel is missing required element `{0}`")]
    Missing(&'static str),
    /// A required child exists but isn't an HTML element.
    #[error("carousel element `{0}` is not an HTML element")]
    NotHtml(&'static str),
    /// The track has no slide children.
    #[error("carousel track has no slides")]
    NoSlides,
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(err: JsValue) -> Self {
        Self::Dom(describe_js(&err))
    }
}

/// Human-readable text for a thrown JS value.
#[must_use]
pub fn describe_js(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Every element a mounted carousel reads or writes.
#[derive(Debug, Clone)]
pub struct CarouselElements {
    pub container: HtmlElement,
    /// Holds the slides; receives the `transform`.
    pub track: HtmlElement,
    pub slides: Vec<Element>,
    pub prev: Element,
    pub next: Element,
    /// May be empty.
    pub indicators: Vec<Element>,
}

impl CarouselElements {
    /// Find the track, controls, and indicators inside `container`.
    ///
    /// # Errors
    ///
    /// [`MountError::Missing`] when the track or either control is absent.
    /// Indicators are optional and an empty set is not an error.
    pub fn discover(container: &HtmlElement) -> Result<Self, MountError> {
        let track = required(container, TRACK_SELECTOR)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::NotHtml(TRACK_SELECTOR))?;
        let slides = collection_elements(&track.children());
        let prev = required(container, PREV_SELECTOR)?;
        let next = required(container, NEXT_SELECTOR)?;
        let indicators = list_elements(&container.query_selector_all(INDICATOR_SELECTOR)?);

        Ok(Self { container: container.clone(), track, slides, prev, next, indicators })
    }

    /// Slide count, which must be positive.
    ///
    /// # Errors
    ///
    /// [`MountError::NoSlides`] for an empty track.
    pub fn slide_count(&self) -> Result<NonZeroUsize, MountError> {
        NonZeroUsize::new(self.slides.len()).ok_or(MountError::NoSlides)
    }

    /// Options from the container attribute; defaults when absent.
    ///
    /// # Errors
    ///
    /// Propagates [`OptionsError`] for a present but invalid attribute.
    pub fn read_options(&self) -> Result<CarouselOptions, OptionsError> {
        match self.container.get_attribute(OPTIONS_ATTRIBUTE) {
            Some(raw) => CarouselOptions::from_json(&raw),
            None => Ok(CarouselOptions::default()),
        }
    }

    /// One-time ARIA roles and labels. Selection state is left to [`paint`](Self::paint).
    ///
    /// # Errors
    ///
    /// Propagates the first failing DOM call.
    pub fn annotate(&self) -> Result<(), JsValue> {
        self.container.set_attribute("role", "region")?;
        self.container.set_attribute("aria-roledescription", "carousel")?;
        let total = self.slides.len();
        for (i, slide) in self.slides.iter().enumerate() {
            slide.set_attribute("role", "group")?;
            slide.set_attribute("aria-roledescription", "slide")?;
            slide.set_attribute("aria-label", &format!("{} of {total}", i + 1))?;
        }
        for (i, indicator) in self.indicators.iter().enumerate() {
            indicator.set_attribute("role", "tab")?;
            indicator.set_attribute("aria-label", &format!("Go to slide {}", i + 1))?;
        }
        Ok(())
    }

    /// Apply `view`: track offset, indicator selection, control state, and
    /// slide visibility for assistive tech.
    ///
    /// Non-animated views suppress the CSS transition for this one paint.
    ///
    /// # Errors
    ///
    /// Propagates the first failing DOM call.
    pub fn paint(&self, view: &View) -> Result<(), JsValue> {
        let style = self.track.style();
        let transform = view.transform();
        if view.animate {
            style.set_property("transform", &transform)?;
        } else {
            style.set_property("transition", "none")?;
            style.set_property("transform", &transform)?;
            // Force layout so the suppressed transition takes effect before it is restored.
            self.track.offset_width();
            style.remove_property("transition")?;
        }

        for (indicator, active) in self.indicators.iter().zip(&view.indicators) {
            indicator.class_list().toggle_with_force(ACTIVE_CLASS, *active)?;
            indicator.set_attribute("aria-selected", aria_bool(*active))?;
        }

        set_disabled(&self.prev, view.prev_disabled)?;
        set_disabled(&self.next, view.next_disabled)?;

        for (i, slide) in self.slides.iter().enumerate() {
            let hidden = !view.slide_active(i);
            slide.set_attribute("aria-hidden", aria_bool(hidden))?;
            // Off-screen slides must not take keyboard focus.
            slide.toggle_attribute_with_force("inert", hidden)?;
        }
        Ok(())
    }
}

fn required(container: &HtmlElement, selector: &'static str) -> Result<Element, MountError> {
    container.query_selector(selector)?.ok_or(MountError::Missing(selector))
}

fn set_disabled(control: &Element, disabled: bool) -> Result<(), JsValue> {
    control.toggle_attribute_with_force("disabled", disabled)?;
    control.set_attribute("aria-disabled", aria_bool(disabled))
}

fn collection_elements(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

fn list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
