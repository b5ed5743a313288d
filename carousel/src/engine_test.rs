#![allow(clippy::float_cmp)]

use std::num::NonZeroUsize;

use super::*;
use crate::options::CarouselOptions;

// =============================================================
// Helpers
// =============================================================

/// A timer the fake host is running.
#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TimerId,
    kind: TimerKind,
    due: u64,
    period: Option<u64>,
}

/// Deterministic stand-in for the browser: runs timers on a virtual clock
/// and records everything the core asks it to paint or announce.
struct Harness {
    core: CarouselCore,
    now: u64,
    timers: Vec<Pending>,
    renders: Vec<View>,
    announcements: Vec<String>,
}

impl Harness {
    fn new(slides: usize, indicators: usize) -> Self {
        Self::with_options(slides, indicators, CarouselOptions::default())
    }

    fn with_options(slides: usize, indicators: usize, options: CarouselOptions) -> Self {
        let count = NonZeroUsize::new(slides).unwrap();
        let mut h = Self {
            core: CarouselCore::new(count, indicators, options),
            now: 0,
            timers: Vec::new(),
            renders: Vec::new(),
            announcements: Vec::new(),
        };
        let actions = h.core.mount();
        h.apply(actions);
        h
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Render(view) => self.renders.push(view),
                Action::StartTimer { id, kind, delay_ms, repeat } => {
                    assert!(self.timers.iter().all(|t| t.id != id), "timer id reused");
                    let delay = u64::from(delay_ms);
                    self.timers.push(Pending {
                        id,
                        kind,
                        due: self.now + delay,
                        period: repeat.then_some(delay),
                    });
                }
                Action::CancelTimer(id) => self.timers.retain(|t| t.id != id),
                Action::Announce(text) => self.announcements.push(text),
            }
        }
    }

    /// Advance the virtual clock, firing timers in due order.
    fn advance(&mut self, ms: u64) {
        let end = self.now + ms;
        loop {
            let Some(next) = self
                .timers
                .iter()
                .filter(|t| t.due <= end)
                .min_by_key(|t| (t.due, t.id))
                .copied()
            else {
                break;
            };
            self.now = next.due;
            match next.period {
                Some(period) => {
                    if let Some(t) = self.timers.iter_mut().find(|t| t.id == next.id) {
                        t.due += period;
                    }
                }
                None => self.timers.retain(|t| t.id != next.id),
            }
            let actions = self.core.on_timer(next.id);
            self.apply(actions);
        }
        self.now = end;
    }

    fn run(&mut self, f: impl FnOnce(&mut CarouselCore) -> Vec<Action>) {
        let actions = f(&mut self.core);
        self.apply(actions);
    }

    fn live(&self, kind: TimerKind) -> usize {
        self.timers.iter().filter(|t| t.kind == kind).count()
    }

    fn last_view(&self) -> &View {
        self.renders.last().unwrap()
    }

    fn index(&self) -> usize {
        self.core.current_index()
    }

    /// Let any in-flight transition finish.
    fn settle(&mut self) {
        self.advance(500);
    }
}

fn core(slides: usize) -> CarouselCore {
    CarouselCore::new(NonZeroUsize::new(slides).unwrap(), slides, CarouselOptions::default())
}

fn renders(actions: &[Action]) -> usize {
    actions.iter().filter(|a| matches!(a, Action::Render(_))).count()
}

fn no_autoplay() -> CarouselOptions {
    CarouselOptions { autoplay: false, ..CarouselOptions::default() }
}

// =============================================================
// Construction and mount
// =============================================================

#[test]
fn new_core_starts_idle_on_first_slide() {
    let c = core(3);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.slide_count(), 3);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.autoplay_active());
}

#[test]
fn mount_paints_without_animation_and_starts_autoplay() {
    let h = Harness::new(3, 3);
    assert_eq!(h.renders.len(), 1);
    let view = h.last_view();
    assert_eq!(view.index, 0);
    assert!(!view.animate);
    assert!(view.prev_disabled);
    assert!(!view.next_disabled);
    assert_eq!(h.live(TimerKind::Autoplay), 1);
    assert!(!h.core.is_animating());
    assert!(h.announcements.is_empty());
}

#[test]
fn mount_with_autoplay_disabled_starts_no_timer() {
    let h = Harness::with_options(3, 3, no_autoplay());
    assert_eq!(h.live(TimerKind::Autoplay), 0);
    assert!(!h.core.autoplay_active());
}

// =============================================================
// go_to
// =============================================================

#[test]
fn go_to_without_animation_projects_every_index() {
    let mut h = Harness::new(5, 5);
    for i in 0..5 {
        h.run(|c| c.go_to(i, false));
        let view = h.last_view().clone();
        assert_eq!(h.index(), i);
        assert_eq!(view.offset_percent, -(i as f64) * 100.0);
        assert_eq!(view.indicators.iter().filter(|a| **a).count(), 1);
        assert!(view.indicators[i]);
        assert_eq!(view.prev_disabled, i == 0);
        assert_eq!(view.next_disabled, i == 4);
        assert!(!h.core.is_animating());
    }
}

#[test]
fn go_to_out_of_range_is_noop() {
    let mut c = core(3);
    assert!(c.go_to(3, true).is_empty());
    assert!(c.go_to(usize::MAX, false).is_empty());
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn animated_go_to_locks_then_unlocks_after_transition() {
    let mut h = Harness::new(3, 3);
    h.run(|c| c.go_to(2, true));
    assert!(h.core.is_animating());
    assert!(matches!(h.core.phase(), Phase::Transitioning { from: 0, to: 2, .. }));
    assert!(h.last_view().animate);
    assert_eq!(h.live(TimerKind::Unlock), 1);

    h.advance(499);
    assert!(h.core.is_animating());
    h.advance(1);
    assert!(!h.core.is_animating());
    assert_eq!(h.live(TimerKind::Unlock), 0);
}

#[test]
fn animated_go_to_while_transitioning_is_dropped() {
    let mut c = core(4);
    assert_eq!(renders(&c.go_to(1, true)), 1);
    assert!(c.go_to(3, true).is_empty());
    assert_eq!(c.current_index(), 1);
}

#[test]
fn animated_go_to_same_index_still_locks() {
    let mut c = core(3);
    let actions = c.go_to(0, true);
    assert_eq!(renders(&actions), 1);
    assert!(c.is_animating());
}

// =============================================================
// next / prev
// =============================================================

#[test]
fn next_advances_and_prev_returns() {
    let mut h = Harness::new(3, 3);
    h.run(CarouselCore::next);
    assert_eq!(h.index(), 1);
    h.settle();
    h.run(CarouselCore::prev);
    assert_eq!(h.index(), 0);
}

#[test]
fn next_at_last_slide_is_noop() {
    let mut h = Harness::new(3, 3);
    h.run(|c| c.go_to(2, false));
    let before = h.renders.len();
    let actions = h.core.next();
    assert!(actions.is_empty());
    assert_eq!(h.index(), 2);
    assert_eq!(h.renders.len(), before);
    assert!(!h.core.is_animating());
}

#[test]
fn prev_at_first_slide_is_noop() {
    let mut c = core(3);
    assert!(c.prev().is_empty());
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn buttons_report_boundaries_during_manual_walk() {
    let mut h = Harness::new(4, 4);
    for expected in 1..4 {
        h.run(CarouselCore::next);
        h.settle();
        let view = h.last_view();
        assert_eq!(view.index, expected);
        assert!(!view.prev_disabled);
        assert_eq!(view.next_disabled, expected == 3);
    }
}

#[test]
fn second_navigation_before_unlock_is_dropped_not_queued() {
    let mut h = Harness::new(4, 4);
    h.run(CarouselCore::next);
    h.run(CarouselCore::next);
    assert_eq!(h.index(), 1);
    let animated = h.renders.iter().filter(|v| v.animate).count();
    assert_eq!(animated, 1);

    h.settle();
    assert_eq!(h.index(), 1);
    assert_eq!(h.renders.iter().filter(|v| v.animate).count(), 1);
}

#[test]
fn navigation_after_unlock_applies() {
    let mut h = Harness::new(4, 4);
    h.run(CarouselCore::next);
    h.settle();
    h.run(CarouselCore::next);
    assert_eq!(h.index(), 2);
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn autoplay_advances_every_delay() {
    let mut h = Harness::new(3, 3);
    h.advance(4999);
    assert_eq!(h.index(), 0);
    h.advance(1);
    assert_eq!(h.index(), 1);
    h.advance(5000);
    assert_eq!(h.index(), 2);
}

#[test]
fn autoplay_tick_wraps_at_last_slide() {
    let mut h = Harness::new(3, 3);
    h.run(|c| c.go_to(2, false));
    assert!(h.core.next().is_empty());
    h.run(CarouselCore::autoplay_tick);
    assert_eq!(h.index(), 0);
}

#[test]
fn autoplay_wraps_through_full_cycle() {
    let mut h = Harness::new(3, 3);
    h.advance(15_000);
    assert_eq!(h.index(), 0);
    assert_eq!(h.live(TimerKind::Autoplay), 1);
}

#[test]
fn autoplay_tick_does_not_restart_timer() {
    let mut c = core(3);
    let started = c.start_autoplay();
    let actions = c.autoplay_tick();
    assert!(!actions.iter().any(|a| matches!(a, Action::CancelTimer(_))));
    assert!(!actions.iter().any(|a| matches!(a, Action::StartTimer { kind: TimerKind::Autoplay, .. })));
    assert_eq!(started.len(), 1);
    assert!(c.autoplay_active());
}

#[test]
fn autoplay_tick_respects_lock() {
    let mut c = core(3);
    c.go_to(1, true);
    assert!(c.autoplay_tick().is_empty());
    assert_eq!(c.current_index(), 1);
}

#[test]
fn start_autoplay_twice_keeps_one_timer() {
    let mut h = Harness::new(3, 3);
    h.run(CarouselCore::start_autoplay);
    h.run(CarouselCore::start_autoplay);
    assert_eq!(h.live(TimerKind::Autoplay), 1);
}

#[test]
fn start_autoplay_when_disabled_is_noop() {
    let mut h = Harness::with_options(3, 3, no_autoplay());
    h.run(CarouselCore::start_autoplay);
    assert_eq!(h.live(TimerKind::Autoplay), 0);
}

#[test]
fn stop_autoplay_when_stopped_is_noop() {
    let mut c = core(3);
    assert!(c.stop_autoplay().is_empty());
}

#[test]
fn reset_autoplay_is_stop_then_start() {
    let mut c = core(3);
    c.start_autoplay();
    let actions = c.reset_autoplay();
    assert_eq!(actions.len(), 2);
    assert!(matches!(actions[0], Action::CancelTimer(_)));
    assert!(matches!(actions[1], Action::StartTimer { kind: TimerKind::Autoplay, repeat: true, .. }));
}

#[test]
fn manual_navigation_resets_autoplay_countdown() {
    let mut h = Harness::new(4, 4);
    h.advance(4000);
    h.run(CarouselCore::next);
    assert_eq!(h.index(), 1);
    h.advance(4999);
    assert_eq!(h.index(), 1);
    h.advance(1);
    assert_eq!(h.index(), 2);
    assert_eq!(h.live(TimerKind::Autoplay), 1);
}

#[test]
fn indicator_click_jumps_and_resets_countdown() {
    let mut h = Harness::new(4, 4);
    h.advance(3000);
    h.run(|c| c.go_to_indicator(3));
    assert_eq!(h.index(), 3);
    assert!(h.last_view().indicators[3]);
    h.advance(4999);
    assert_eq!(h.index(), 3);
    h.advance(1);
    assert_eq!(h.index(), 0);
}

#[test]
fn indicator_click_out_of_range_is_noop() {
    let mut c = core(3);
    c.start_autoplay();
    assert!(c.go_to_indicator(7).is_empty());
}

// =============================================================
// Hover
// =============================================================

#[test]
fn hover_pauses_autoplay() {
    let mut h = Harness::new(3, 3);
    h.run(CarouselCore::hover_enter);
    assert_eq!(h.live(TimerKind::Autoplay), 0);
    h.advance(5000);
    assert_eq!(h.index(), 0);
    h.advance(20_000);
    assert_eq!(h.index(), 0);
}

#[test]
fn hover_leave_resumes_autoplay_with_full_delay() {
    let mut h = Harness::new(3, 3);
    h.run(CarouselCore::hover_enter);
    h.advance(7000);
    h.run(CarouselCore::hover_leave);
    assert_eq!(h.live(TimerKind::Autoplay), 1);
    h.advance(4999);
    assert_eq!(h.index(), 0);
    h.advance(1);
    assert_eq!(h.index(), 1);
}

#[test]
fn navigation_while_hovered_keeps_autoplay_paused() {
    let mut h = Harness::new(4, 4);
    h.run(CarouselCore::hover_enter);
    h.run(CarouselCore::next);
    assert_eq!(h.index(), 1);
    assert_eq!(h.live(TimerKind::Autoplay), 0);
    h.advance(10_000);
    assert_eq!(h.index(), 1);
}

#[test]
fn hover_leave_with_autoplay_disabled_starts_nothing() {
    let mut c = CarouselCore::new(NonZeroUsize::new(3).unwrap(), 3, no_autoplay());
    c.hover_enter();
    assert!(c.hover_leave().is_empty());
    assert!(!c.autoplay_active());
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_keys_navigate() {
    let mut h = Harness::new(3, 3);
    h.run(|c| c.key_down("ArrowRight"));
    assert_eq!(h.index(), 1);
    h.settle();
    h.run(|c| c.key_down("ArrowLeft"));
    assert_eq!(h.index(), 0);
}

#[test]
fn other_keys_do_nothing() {
    let mut c = core(3);
    assert!(c.key_down("Enter").is_empty());
    assert!(c.key_down("ArrowDown").is_empty());
}

// =============================================================
// Touch
// =============================================================

#[test]
fn swipe_of_49_px_does_not_navigate() {
    let mut c = core(3);
    c.touch_start(200.0);
    c.touch_move(170.0);
    assert!(c.touch_end(151.0).is_empty());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn swipe_left_of_51_px_goes_next() {
    let mut c = core(3);
    c.touch_start(200.0);
    let actions = c.touch_end(149.0);
    assert_eq!(renders(&actions), 1);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn swipe_right_of_51_px_goes_prev() {
    let mut h = Harness::new(3, 3);
    h.run(|c| c.go_to(2, false));
    h.core.touch_start(100.0);
    h.run(|c| c.touch_end(151.0));
    assert_eq!(h.index(), 1);
}

#[test]
fn swipe_of_exactly_threshold_does_not_navigate() {
    let mut c = core(3);
    c.touch_start(100.0);
    assert!(c.touch_end(50.0).is_empty());
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut c = core(3);
    assert!(c.touch_end(0.0).is_empty());
}

#[test]
fn touch_cancel_discards_gesture() {
    let mut c = core(3);
    c.touch_start(300.0);
    c.touch_cancel();
    assert!(c.touch_end(0.0).is_empty());
}

#[test]
fn custom_threshold_is_honored() {
    let options = CarouselOptions { swipe_threshold_px: 10.0, ..CarouselOptions::default() };
    let mut c = CarouselCore::new(NonZeroUsize::new(3).unwrap(), 0, options);
    c.touch_start(20.0);
    c.touch_end(9.0);
    assert_eq!(c.current_index(), 1);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_resync_never_toggles_lock() {
    let mut h = Harness::new(3, 3);
    h.run(|c| c.go_to(1, false));
    assert!(!h.core.is_animating());
    h.run(CarouselCore::resize);
    assert!(!h.core.is_animating());
    h.advance(250);
    assert!(!h.core.is_animating());
    let view = h.last_view();
    assert_eq!(view.index, 1);
    assert!(!view.animate);
    assert_eq!(h.live(TimerKind::Unlock), 0);
}

#[test]
fn resize_burst_collapses_to_one_resync() {
    let mut h = Harness::with_options(3, 3, no_autoplay());
    let before = h.renders.len();
    for _ in 0..5 {
        h.run(CarouselCore::resize);
        h.advance(100);
    }
    assert_eq!(h.renders.len(), before);
    assert_eq!(h.live(TimerKind::Resize), 1);
    h.advance(150);
    assert_eq!(h.renders.len(), before + 1);
    assert_eq!(h.live(TimerKind::Resize), 0);
}

#[test]
fn resize_resync_mid_transition_keeps_lock_until_unlock() {
    let mut h = Harness::with_options(3, 3, no_autoplay());
    h.run(|c| c.go_to(2, true));
    h.advance(100);
    h.run(CarouselCore::resize);
    h.advance(250);
    let view = h.last_view();
    assert_eq!(view.index, 2);
    assert!(!view.animate);
    assert!(h.core.is_animating());
    h.advance(150);
    assert!(!h.core.is_animating());
}

#[test]
fn non_animated_go_to_mid_transition_retargets_phase() {
    let mut c = core(4);
    c.go_to(1, true);
    c.go_to(3, false);
    assert!(matches!(c.phase(), Phase::Transitioning { from: 0, to: 3, .. }));
    assert_eq!(c.current_index(), 3);
}

// =============================================================
// Timers and announcements
// =============================================================

#[test]
fn stale_timer_is_ignored() {
    let mut c = core(3);
    let Some(Action::StartTimer { id, .. }) = c.start_autoplay().into_iter().next() else {
        panic!("expected autoplay timer");
    };
    c.stop_autoplay();
    assert!(c.on_timer(id).is_empty());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn timer_ids_are_unique() {
    let mut c = core(3);
    let mut ids = Vec::new();
    for action in c.go_to(1, true).into_iter().chain(c.resize()).chain(c.start_autoplay()) {
        if let Action::StartTimer { id, .. } = action {
            ids.push(id);
        }
    }
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids, deduped);
}

#[test]
fn animated_moves_announce_position() {
    let mut h = Harness::new(3, 3);
    h.run(CarouselCore::next);
    assert_eq!(h.announcements, vec!["Slide 2 of 3".to_owned()]);
}

#[test]
fn autoplay_rotation_is_silent() {
    let mut h = Harness::new(3, 3);
    h.advance(15_000);
    assert_eq!(h.index(), 0);
    assert_eq!(h.renders.iter().filter(|v| v.animate).count(), 3);
    assert!(h.announcements.is_empty());
}

#[test]
fn manual_move_after_autoplay_still_announces() {
    let mut h = Harness::new(3, 3);
    h.advance(5000);
    h.settle();
    h.run(CarouselCore::next);
    assert_eq!(h.announcements, vec!["Slide 3 of 3".to_owned()]);
}

#[test]
fn resync_does_not_announce() {
    let mut h = Harness::new(3, 3);
    h.run(CarouselCore::resize);
    h.advance(250);
    assert!(h.announcements.is_empty());
}

#[test]
fn announcements_can_be_disabled() {
    let options = CarouselOptions { announce: false, ..CarouselOptions::default() };
    let mut h = Harness::with_options(3, 3, options);
    h.run(CarouselCore::next);
    assert!(h.announcements.is_empty());
}

#[test]
fn single_slide_carousel_only_autoplays_in_place() {
    let mut h = Harness::new(1, 0);
    assert!(h.core.next().is_empty());
    assert!(h.core.prev().is_empty());
    h.advance(5000);
    assert_eq!(h.index(), 0);
    let view = h.last_view();
    assert!(view.prev_disabled && view.next_disabled);
}
