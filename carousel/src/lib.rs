//! Carousel state machine and DOM painter for the landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The
//! [`engine::CarouselCore`] owns slide index, animation phase, autoplay and
//! resize timers, and the touch gesture; it answers every input with a list
//! of [`engine::Action`]s. The page host executes those actions: it paints
//! views through [`dom::CarouselElements`], runs timers, and forwards
//! announcements to the live region.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `CarouselCore` state machine and the DOM-bound `Carousel` |
//! | [`input`] | Navigation keys, swipe resolution, touch tracker |
//! | [`view`] | Pure projection of an index into offsets and ARIA state |
//! | [`dom`] | Element discovery, mount errors, painting |
//! | [`options`] | Per-instance tuning parsed from the container attribute |
//! | [`consts`] | Timing defaults and structural selectors |

pub mod consts;
pub mod dom;
pub mod engine;
pub mod input;
pub mod options;
pub mod view;
