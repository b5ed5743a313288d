//! Pure projection of carousel state into what the page shows.
//!
//! A [`View`] is everything the DOM painter needs: the track offset, which
//! indicator is selected, which controls are disabled, and whether the CSS
//! transition should play. It is computed from the index alone so animated
//! and non-animated moves always leave identical attributes behind.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Snapshot of the visual state for one index.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// The slide being shown.
    pub index: usize,
    /// Number of slides.
    pub slide_count: usize,
    /// Horizontal track offset in percent (`-index * 100`).
    pub offset_percent: f64,
    /// One flag per indicator element; at most one is `true`.
    pub indicators: Vec<bool>,
    /// "Previous" is disabled (first slide).
    pub prev_disabled: bool,
    /// "Next" is disabled (last slide).
    pub next_disabled: bool,
    /// Play the CSS transition for this paint.
    pub animate: bool,
}

impl View {
    /// Project `index` for a carousel of `slide_count` slides and
    /// `indicator_count` indicator elements.
    #[must_use]
    pub fn project(index: usize, slide_count: usize, indicator_count: usize, animate: bool) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let offset_percent = -(index as f64) * 100.0;
        Self {
            index,
            slide_count,
            offset_percent,
            indicators: (0..indicator_count).map(|i| i == index).collect(),
            prev_disabled: index == 0,
            next_disabled: index + 1 >= slide_count,
            animate,
        }
    }

    /// CSS `transform` value for the track.
    #[must_use]
    pub fn transform(&self) -> String {
        if self.offset_percent == 0.0 {
            return "translateX(0%)".to_owned();
        }
        format!("translateX({}%)", self.offset_percent)
    }

    /// Whether slide `i` is the visible one.
    #[must_use]
    pub fn slide_active(&self, i: usize) -> bool {
        i == self.index
    }

    /// Live-region text for this position, 1-based.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("Slide {} of {}", self.index + 1, self.slide_count)
    }
}

/// String form of a boolean ARIA attribute.
#[must_use]
pub fn aria_bool(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}
