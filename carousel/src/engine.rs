use std::num::NonZeroUsize;

use wasm_bindgen::JsValue;

use crate::dom::{CarouselElements, MountError};
use crate::input::{NavKey, Swipe, TouchGesture, resolve_swipe};
use crate::options::CarouselOptions;
use crate::view::View;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Handle for a timer the host is asked to run.
///
/// Ids are never reused within one core, so a fire for a cancelled or
/// superseded timer is recognized and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id, for host-side bookkeeping and logs.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What a timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Releases the transition lock.
    Unlock,
    /// Recurring autoplay heartbeat.
    Autoplay,
    /// Debounced resize resync.
    Resize,
}

/// Actions returned from carousel operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Paint this view onto the DOM.
    Render(View),
    /// Start a timer. `repeat` timers fire every `delay_ms` until cancelled.
    StartTimer { id: TimerId, kind: TimerKind, delay_ms: u32, repeat: bool },
    /// Cancel a previously started timer.
    CancelTimer(TimerId),
    /// Post text to the page live region.
    Announce(String),
}

/// Animation phase.
///
/// Animated moves are only accepted from `Idle`. A non-animated resync is
/// accepted in either phase and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No transition in flight.
    #[default]
    Idle,
    /// A transition is playing; the lock releases when `unlock` fires.
    Transitioning { from: usize, to: usize, unlock: TimerId },
}

/// Carousel state machine: everything that does not touch the DOM.
///
/// Separated from the page host so it can be tested without WASM/browser
/// dependencies. Every operation returns the [`Action`]s the host must carry
/// out; the core never schedules or paints anything itself.
#[derive(Debug)]
pub struct CarouselCore {
    slide_count: NonZeroUsize,
    indicator_count: usize,
    options: CarouselOptions,
    current: usize,
    phase: Phase,
    autoplay: Option<TimerId>,
    resize: Option<TimerId>,
    touch: TouchGesture,
    hovered: bool,
    next_timer: u64,
}

impl CarouselCore {
    /// Build a core positioned on the first slide.
    ///
    /// Nothing is painted and no timer runs until the host calls
    /// [`mount`](Self::mount).
    #[must_use]
    pub fn new(slide_count: NonZeroUsize, indicator_count: usize, options: CarouselOptions) -> Self {
        Self {
            slide_count,
            indicator_count,
            options,
            current: 0,
            phase: Phase::Idle,
            autoplay: None,
            resize: None,
            touch: TouchGesture::default(),
            hovered: false,
            next_timer: 0,
        }
    }

    /// Initial paint plus autoplay start.
    pub fn mount(&mut self) -> Vec<Action> {
        let mut actions = self.go_to(self.current, false);
        actions.extend(self.start_autoplay());
        actions
    }

    // --- Navigation ---

    /// Move to `index`.
    ///
    /// Out-of-range indices are rejected. Animated moves are dropped while a
    /// transition is in flight; non-animated moves (layout resyncs) always
    /// apply and leave the phase alone, so they never release an in-flight
    /// lock. Animated moves are announced when `announce` is enabled.
    pub fn go_to(&mut self, index: usize, animate: bool) -> Vec<Action> {
        if index >= self.slide_count.get() {
            log::debug!("carousel: rejected out-of-range index {index}");
            return Vec::new();
        }
        if !animate {
            self.current = index;
            if let Phase::Transitioning { to, .. } = &mut self.phase {
                *to = index;
            }
            return vec![Action::Render(self.view(false))];
        }
        self.slide_to(index, self.options.announce)
    }

    /// Start an animated transition to an in-range `index`.
    fn slide_to(&mut self, index: usize, announce: bool) -> Vec<Action> {
        if self.is_animating() {
            log::debug!("carousel: dropped move to {index} during transition");
            return Vec::new();
        }

        let from = self.current;
        let unlock = self.alloc_timer();
        self.current = index;
        self.phase = Phase::Transitioning { from, to: index, unlock };

        let view = self.view(true);
        let mut actions = Vec::with_capacity(3);
        if announce {
            actions.push(Action::Announce(view.announcement()));
        }
        actions.push(Action::Render(view));
        actions.push(Action::StartTimer {
            id: unlock,
            kind: TimerKind::Unlock,
            delay_ms: self.options.transition_ms,
            repeat: false,
        });
        actions
    }

    /// Advance one slide. No wraparound; restarts the autoplay countdown.
    pub fn next(&mut self) -> Vec<Action> {
        if self.current + 1 >= self.slide_count.get() {
            return Vec::new();
        }
        let mut actions = self.go_to(self.current + 1, true);
        actions.extend(self.reset_autoplay());
        actions
    }

    /// Go back one slide. No wraparound; restarts the autoplay countdown.
    pub fn prev(&mut self) -> Vec<Action> {
        if self.current == 0 {
            return Vec::new();
        }
        let mut actions = self.go_to(self.current - 1, true);
        actions.extend(self.reset_autoplay());
        actions
    }

    /// Indicator click: jump to `index` and restart the autoplay countdown.
    pub fn go_to_indicator(&mut self, index: usize) -> Vec<Action> {
        if index >= self.slide_count.get() {
            return Vec::new();
        }
        let mut actions = self.go_to(index, true);
        actions.extend(self.reset_autoplay());
        actions
    }

    /// Autoplay heartbeat. Wraps from the last slide to the first and
    /// leaves its own timer running. Rotation is silent: only user-driven
    /// moves reach the live region.
    pub fn autoplay_tick(&mut self) -> Vec<Action> {
        let target = if self.current + 1 >= self.slide_count.get() { 0 } else { self.current + 1 };
        self.slide_to(target, false)
    }

    // --- Autoplay ---

    /// Start the heartbeat if enabled, not hovered, and not already running.
    pub fn start_autoplay(&mut self) -> Vec<Action> {
        if !self.options.autoplay || self.hovered || self.autoplay.is_some() {
            return Vec::new();
        }
        let id = self.alloc_timer();
        self.autoplay = Some(id);
        vec![Action::StartTimer {
            id,
            kind: TimerKind::Autoplay,
            delay_ms: self.options.autoplay_delay_ms,
            repeat: true,
        }]
    }

    /// Cancel the heartbeat if running.
    pub fn stop_autoplay(&mut self) -> Vec<Action> {
        self.autoplay.take().map(Action::CancelTimer).into_iter().collect()
    }

    /// Stop then start, restarting the countdown from zero.
    pub fn reset_autoplay(&mut self) -> Vec<Action> {
        let mut actions = self.stop_autoplay();
        actions.extend(self.start_autoplay());
        actions
    }

    /// Pointer entered the container: pause autoplay.
    pub fn hover_enter(&mut self) -> Vec<Action> {
        self.hovered = true;
        self.stop_autoplay()
    }

    /// Pointer left the container: resume autoplay.
    pub fn hover_leave(&mut self) -> Vec<Action> {
        self.hovered = false;
        self.start_autoplay()
    }

    // --- Input adapters ---

    /// Keyboard: `ArrowLeft` / `ArrowRight`.
    pub fn key_down(&mut self, key: &str) -> Vec<Action> {
        match NavKey::from_key(key) {
            Some(NavKey::Left) => self.prev(),
            Some(NavKey::Right) => self.next(),
            None => Vec::new(),
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch.begin(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.touch.track(x);
    }

    /// Resolve the gesture. Navigation only when the displacement exceeds
    /// the swipe threshold.
    pub fn touch_end(&mut self, x: f64) -> Vec<Action> {
        let Some(displacement) = self.touch.finish(x) else {
            return Vec::new();
        };
        match resolve_swipe(displacement, self.options.swipe_threshold_px) {
            Some(Swipe::Next) => self.next(),
            Some(Swipe::Prev) => self.prev(),
            None => Vec::new(),
        }
    }

    pub fn touch_cancel(&mut self) {
        self.touch.cancel();
    }

    /// Window resized: restart the debounce window.
    pub fn resize(&mut self) -> Vec<Action> {
        let mut actions: Vec<Action> = self.resize.take().map(Action::CancelTimer).into_iter().collect();
        let id = self.alloc_timer();
        self.resize = Some(id);
        actions.push(Action::StartTimer {
            id,
            kind: TimerKind::Resize,
            delay_ms: self.options.resize_debounce_ms,
            repeat: false,
        });
        actions
    }

    // --- Timers ---

    /// A timer fired. Ids the core no longer tracks are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> Vec<Action> {
        if let Phase::Transitioning { unlock, .. } = self.phase {
            if unlock == id {
                self.phase = Phase::Idle;
                return Vec::new();
            }
        }
        if self.autoplay == Some(id) {
            return self.autoplay_tick();
        }
        if self.resize == Some(id) {
            self.resize = None;
            return self.go_to(self.current, false);
        }
        log::debug!("carousel: ignored stale timer {}", id.get());
        Vec::new()
    }

    // --- Queries ---

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count.get()
    }

    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.indicator_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Projection of the current position.
    #[must_use]
    pub fn view(&self, animate: bool) -> View {
        View::project(self.current, self.slide_count.get(), self.indicator_count, animate)
    }

    fn alloc_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }
}

/// A carousel bound to its page elements. Wraps `CarouselCore` and owns the DOM references.
#[derive(Debug)]
pub struct Carousel {
    elements: CarouselElements,
    pub core: CarouselCore,
}

impl Carousel {
    /// Validate `elements`, apply ARIA roles, and build the core.
    ///
    /// # Errors
    ///
    /// [`MountError::NoSlides`] for an empty track; DOM failures while
    /// annotating surface as [`MountError::Dom`].
    pub fn new(elements: CarouselElements, options: CarouselOptions) -> Result<Self, MountError> {
        let slide_count = elements.slide_count()?;
        elements.annotate()?;
        let core = CarouselCore::new(slide_count, elements.indicators.len(), options);
        Ok(Self { elements, core })
    }

    #[must_use]
    pub fn elements(&self) -> &CarouselElements {
        &self.elements
    }

    /// Draw `view` onto the mounted elements.
    ///
    /// # Errors
    ///
    /// Propagates the first failing DOM call.
    pub fn paint(&self, view: &View) -> Result<(), JsValue> {
        self.elements.paint(view)
    }
}
