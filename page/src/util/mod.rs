//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the behavior
//! modules so their pure parts stay testable without a browser.

pub mod announcer;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod motion;
