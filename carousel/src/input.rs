//! Input model: navigation keys, swipe gestures, and the touch tracker.
//!
//! The host translates raw DOM events into these types. `TouchGesture`
//! carries the gesture between touch-start and touch-end; only the endpoints
//! matter, intermediate movement is recorded but never drives a live-follow
//! animation.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A key the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// `ArrowLeft`: previous slide.
    Left,
    /// `ArrowRight`: next slide.
    Right,
}

impl NavKey {
    /// Map a browser `KeyboardEvent.key` value. Anything else is ignored.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Direction a completed swipe resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger dragged left: advance.
    Next,
    /// Finger dragged right: go back.
    Prev,
}

/// Resolve a horizontal displacement (`start_x - end_x`) into a swipe.
///
/// The threshold is exclusive: a displacement exactly equal to it does not
/// navigate.
#[must_use]
pub fn resolve_swipe(displacement: f64, threshold: f64) -> Option<Swipe> {
    if displacement.abs() <= threshold {
        return None;
    }
    if displacement > 0.0 { Some(Swipe::Next) } else { Some(Swipe::Prev) }
}

/// Touch gesture tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TouchGesture {
    /// No finger down.
    #[default]
    Idle,
    /// A finger is down.
    Tracking {
        /// Client x at touch-start.
        start_x: f64,
        /// Client x at the most recent touch-move.
        last_x: f64,
    },
}

impl TouchGesture {
    /// Begin tracking at `x`, discarding any unfinished gesture.
    pub fn begin(&mut self, x: f64) {
        *self = Self::Tracking { start_x: x, last_x: x };
    }

    /// Record intermediate movement.
    pub fn track(&mut self, x: f64) {
        if let Self::Tracking { last_x, .. } = self {
            *last_x = x;
        }
    }

    /// Finish the gesture at `end_x` and return the displacement, if a
    /// gesture was in progress.
    pub fn finish(&mut self, end_x: f64) -> Option<f64> {
        match std::mem::take(self) {
            Self::Tracking { start_x, .. } => Some(start_x - end_x),
            Self::Idle => None,
        }
    }

    /// Abandon the gesture without navigating.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
