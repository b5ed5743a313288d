//! Page-level switches for the behavior modules.
//!
//! Read once at start-up from an optional JSON script block:
//!
//! ```html
//! <script type="application/json" id="page-config">{"parallax": false}</script>
//! ```
//!
//! Missing block or missing keys fall back to defaults (everything on).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Element id of the JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Which modules run, plus the few knobs they expose.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub carousels: bool,
    pub scroll_animations: bool,
    pub ripple: bool,
    pub smooth_scroll: bool,
    pub lazy_images: bool,
    pub accessibility: bool,
    pub parallax: bool,
    /// Id of the element the skip link jumps to.
    pub main_content_id: String,
    /// Selector for a fixed header whose height offsets smooth scrolling.
    pub header_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            carousels: true,
            scroll_animations: true,
            ripple: true,
            smooth_scroll: true,
            lazy_images: true,
            accessibility: true,
            parallax: true,
            main_content_id: "main-content".to_owned(),
            header_selector: "header".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse the config block text. Blank text means defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}
