//! Reduced-motion preference.
//!
//! Users who ask the OS for reduced motion get no carousel autoplay and no
//! parallax; a `reduced-motion` class on `<html>` lets CSS drop transitions.

/// Media query for the user preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Class set on the document element when the preference is active.
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";

/// Whether the user prefers reduced motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Reflect the preference on `<html>`.
#[cfg(feature = "hydrate")]
pub fn apply(document: &web_sys::Document, reduced: bool) -> Result<(), crate::error::PageError> {
    if let Some(root) = document.document_element() {
        root.class_list().toggle_with_force(REDUCED_MOTION_CLASS, reduced)?;
    }
    Ok(())
}
