//! Shared constants for the carousel crate.

// ── Timing ──────────────────────────────────────────────────────

/// Autoplay cadence in milliseconds.
pub const AUTOPLAY_DELAY_MS: u32 = 5000;

/// How long the transition lock stays held after an animated move.
pub const TRANSITION_MS: u32 = 500;

/// Quiet window before a burst of resize events collapses into one resync.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── Gestures ────────────────────────────────────────────────────

/// Minimum horizontal swipe distance in CSS pixels. Strictly greater triggers.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// ── Structure ───────────────────────────────────────────────────

/// Container marker used for page-level discovery.
pub const CONTAINER_SELECTOR: &str = ".carousel";

/// The element whose children are the slides and which carries the transform.
pub const TRACK_SELECTOR: &str = ".carousel-track";

/// "Previous" control.
pub const PREV_SELECTOR: &str = ".carousel-prev";

/// "Next" control.
pub const NEXT_SELECTOR: &str = ".carousel-next";

/// Optional per-slide indicator dots.
pub const INDICATOR_SELECTOR: &str = ".carousel-indicator";

/// Container attribute holding JSON [`crate::options::CarouselOptions`].
pub const OPTIONS_ATTRIBUTE: &str = "data-carousel-options";

/// Class toggled on the indicator matching the current slide.
pub const ACTIVE_CLASS: &str = "active";
