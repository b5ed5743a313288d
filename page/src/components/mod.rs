//! Behavior modules attached to the landing page.
//!
//! Each module is initialized once at start-up and shares nothing with the
//! others, except that carousels post to the accessibility live region.

pub mod accessibility;
#[cfg(feature = "hydrate")]
pub mod carousel_host;
pub mod lazy_images;
pub mod parallax;
pub mod ripple;
pub mod scroll_animator;
pub mod smooth_scroll;
