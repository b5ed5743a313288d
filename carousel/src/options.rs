//! Per-carousel tuning, read from the container's options attribute.
//!
//! Every field is optional on the wire; omitted keys fall back to the
//! constants in [`crate::consts`]. Keys are camelCase so the attribute reads
//! naturally in HTML:
//!
//! ```html
//! <div class="carousel" data-carousel-options='{"autoplayDelayMs": 8000}'>
//! ```

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AUTOPLAY_DELAY_MS, RESIZE_DEBOUNCE_MS, SWIPE_THRESHOLD_PX, TRANSITION_MS};

/// Error returned by [`CarouselOptions::from_json`] and [`CarouselOptions::validate`].
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// The attribute value is not valid JSON for this shape.
    #[error("failed to parse carousel options: {0}")]
    Parse(#[from] serde_json::Error),
    /// A duration that must be positive was zero.
    #[error("carousel option `{0}` must be greater than zero")]
    ZeroDuration(&'static str),
    /// The swipe threshold is negative or not a finite number.
    #[error("invalid swipe threshold: {0}")]
    InvalidThreshold(f64),
}

/// Where arrow-key navigation is listened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardScope {
    /// Arrow keys anywhere on the page drive the carousel.
    #[default]
    Document,
    /// Only key events originating inside the carousel container.
    Container,
}

/// Tunable behavior for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CarouselOptions {
    /// Whether the autoplay heartbeat runs at all.
    pub autoplay: bool,
    /// Autoplay cadence in milliseconds.
    pub autoplay_delay_ms: u32,
    /// Lock duration for animated moves in milliseconds.
    pub transition_ms: u32,
    /// Horizontal swipe distance (CSS px) that must be exceeded to navigate.
    pub swipe_threshold_px: f64,
    /// Resize quiet window in milliseconds.
    pub resize_debounce_ms: u32,
    /// Post "Slide N of M" to the live region after animated moves.
    pub announce: bool,
    /// Keyboard listener scope.
    pub keyboard_scope: KeyboardScope,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_delay_ms: AUTOPLAY_DELAY_MS,
            transition_ms: TRANSITION_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            announce: true,
            keyboard_scope: KeyboardScope::Document,
        }
    }
}

impl CarouselOptions {
    /// Parse and validate options from the raw attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] for malformed JSON or unknown keys, and
    /// the [`validate`](Self::validate) errors for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ZeroDuration`] if any duration is zero, or
    /// [`OptionsError::InvalidThreshold`] if the swipe threshold is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.autoplay_delay_ms == 0 {
            return Err(OptionsError::ZeroDuration("autoplayDelayMs"));
        }
        if self.transition_ms == 0 {
            return Err(OptionsError::ZeroDuration("transitionMs"));
        }
        if self.resize_debounce_ms == 0 {
            return Err(OptionsError::ZeroDuration("resizeDebounceMs"));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(OptionsError::InvalidThreshold(self.swipe_threshold_px));
        }
        Ok(())
    }
}
