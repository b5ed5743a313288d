//! Bridge between the DOM and `carousel::engine::CarouselCore`.
//!
//! ARCHITECTURE
//! ============
//! The carousel crate owns the state machine and painting. This host maps
//! browser events (clicks, keys, touches, hover, resize) onto core
//! operations and carries out the returned actions: paints, gloo timers,
//! and live-region announcements. Timer handles and listeners are owned by
//! the host, so dropping it detaches the carousel completely.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use carousel::consts::CONTAINER_SELECTOR;
use carousel::dom::{CarouselElements, describe_js};
use carousel::engine::{Action, Carousel, CarouselCore, TimerId};
use carousel::options::{CarouselOptions, KeyboardScope};
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, TouchEvent, TouchList};

use crate::error::PageError;
use crate::util::announcer;
use crate::util::dom::{self, Listener};

/// A running timer. Dropping it cancels it.
enum Scheduled {
    Once(Timeout),
    Every(Interval),
}

impl Scheduled {
    fn cancel(self) {
        match self {
            Self::Once(timeout) => drop(timeout),
            Self::Every(interval) => drop(interval),
        }
    }
}

struct HostState {
    carousel: Carousel,
    timers: HashMap<TimerId, Scheduled>,
}

/// A mounted carousel with its listeners and timers. Held only to keep
/// them alive; dropping it detaches the carousel.
pub struct CarouselHost {
    _state: Rc<RefCell<HostState>>,
    _listeners: Vec<Listener>,
}

impl CarouselHost {
    /// Discover, validate, wire, and paint the carousel in `container`.
    ///
    /// Options come from the container attribute; invalid options fall back
    /// to defaults with a warning. `reduced_motion` disables autoplay.
    pub fn mount(document: &Document, container: &HtmlElement, reduced_motion: bool) -> Result<Self, PageError> {
        let elements = CarouselElements::discover(container)?;
        let mut options = elements.read_options().unwrap_or_else(|err| {
            log::warn!("carousel options ignored: {err}");
            CarouselOptions::default()
        });
        if reduced_motion {
            options.autoplay = false;
        }
        let scope = options.keyboard_scope;

        let state = Rc::new(RefCell::new(HostState { carousel: Carousel::new(elements, options)?, timers: HashMap::new() }));
        let listeners = wire(document, &state, scope)?;

        let actions = state.borrow_mut().carousel.core.mount();
        dispatch(&state, actions);
        log::debug!("carousel mounted with {} slides", state.borrow().carousel.core.slide_count());
        Ok(Self { _state: state, _listeners: listeners })
    }
}

/// Mount every `.carousel` on the page. A container that fails to mount is
/// logged as an error and skipped; the others still mount.
pub fn init(document: &Document, reduced_motion: bool) -> Result<Vec<CarouselHost>, PageError> {
    let mut hosts = Vec::new();
    for container in dom::query_all(document, CONTAINER_SELECTOR)? {
        let Ok(container) = container.dyn_into::<HtmlElement>() else {
            continue;
        };
        match CarouselHost::mount(document, &container, reduced_motion) {
            Ok(host) => hosts.push(host),
            Err(err) => log::error!("carousel mount failed: {err}"),
        }
    }
    Ok(hosts)
}

// --- Wiring ---

fn wire(document: &Document, state: &Rc<RefCell<HostState>>, scope: KeyboardScope) -> Result<Vec<Listener>, PageError> {
    let (container, prev, next, indicators) = {
        let host = state.borrow();
        let elements = host.carousel.elements();
        (
            elements.container.clone(),
            elements.prev.clone(),
            elements.next.clone(),
            elements.indicators.clone(),
        )
    };
    let container_target: &EventTarget = container.as_ref();

    let mut listeners = vec![
        Listener::new(prev.as_ref(), "click", on_event(state, |core, _| core.prev()))?,
        Listener::new(next.as_ref(), "click", on_event(state, |core, _| core.next()))?,
        Listener::new(container_target, "mouseenter", on_event(state, |core, _| core.hover_enter()))?,
        Listener::new(container_target, "mouseleave", on_event(state, |core, _| core.hover_leave()))?,
        Listener::passive(
            container_target,
            "touchstart",
            on_event(state, |core, event| {
                if let Some(x) = touch_x(event, TouchEvent::touches) {
                    core.touch_start(x);
                }
                Vec::new()
            }),
        )?,
        Listener::passive(
            container_target,
            "touchmove",
            on_event(state, |core, event| {
                if let Some(x) = touch_x(event, TouchEvent::touches) {
                    core.touch_move(x);
                }
                Vec::new()
            }),
        )?,
        Listener::new(
            container_target,
            "touchend",
            on_event(state, |core, event| match touch_x(event, TouchEvent::changed_touches) {
                Some(x) => core.touch_end(x),
                None => {
                    core.touch_cancel();
                    Vec::new()
                }
            }),
        )?,
        Listener::new(
            container_target,
            "touchcancel",
            on_event(state, |core, _| {
                core.touch_cancel();
                Vec::new()
            }),
        )?,
    ];

    for (i, indicator) in indicators.iter().enumerate() {
        listeners.push(Listener::new(
            indicator.as_ref(),
            "click",
            on_event(state, move |core, _| core.go_to_indicator(i)),
        )?);
    }

    // Global by default: arrow keys anywhere on the page move every carousel.
    let key_target: EventTarget = match scope {
        KeyboardScope::Document => document.clone().into(),
        KeyboardScope::Container => container.clone().into(),
    };
    listeners.push(Listener::new(
        &key_target,
        "keydown",
        on_event(state, |core, event| match event.dyn_ref::<KeyboardEvent>() {
            Some(key) => core.key_down(&key.key()),
            None => Vec::new(),
        }),
    )?);

    let window = dom::window()?;
    listeners.push(Listener::new(window.as_ref(), "resize", on_event(state, |core, _| core.resize()))?);

    Ok(listeners)
}

/// Adapt a core operation into an event handler holding only a weak reference.
fn on_event<F>(state: &Rc<RefCell<HostState>>, mut op: F) -> impl FnMut(Event) + 'static
where
    F: FnMut(&mut CarouselCore, &Event) -> Vec<Action> + 'static,
{
    let weak = Rc::downgrade(state);
    move |event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let actions = op(&mut state.borrow_mut().carousel.core, &event);
        dispatch(&state, actions);
    }
}

fn touch_x(event: &Event, list: fn(&TouchEvent) -> TouchList) -> Option<f64> {
    let touch = list(event.dyn_ref::<TouchEvent>()?).get(0)?;
    Some(f64::from(touch.client_x()))
}

// --- Actions ---

fn dispatch(state: &Rc<RefCell<HostState>>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::Render(view) => {
                if let Err(err) = state.borrow().carousel.paint(&view) {
                    log::warn!("carousel paint failed: {}", describe_js(&err));
                }
            }
            Action::StartTimer { id, kind, delay_ms, repeat } => {
                log::trace!("carousel timer {} ({kind:?}) every={repeat} in {delay_ms}ms", id.get());
                let scheduled = schedule(state, id, delay_ms, repeat);
                state.borrow_mut().timers.insert(id, scheduled);
            }
            Action::CancelTimer(id) => {
                let removed = state.borrow_mut().timers.remove(&id);
                if let Some(timer) = removed {
                    timer.cancel();
                }
            }
            Action::Announce(text) => announcer::announce(&text),
        }
    }
}

fn schedule(state: &Rc<RefCell<HostState>>, id: TimerId, delay_ms: u32, repeat: bool) -> Scheduled {
    let weak = Rc::downgrade(state);
    if repeat {
        Scheduled::Every(Interval::new(delay_ms, move || fire(&weak, id)))
    } else {
        Scheduled::Once(Timeout::new(delay_ms, move || fire(&weak, id)))
    }
}

fn fire(weak: &Weak<RefCell<HostState>>, id: TimerId) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let actions = {
        let mut host = state.borrow_mut();
        if matches!(host.timers.get(&id), Some(Scheduled::Once(_))) {
            if let Some(timer) = host.timers.remove(&id) {
                timer.cancel();
            }
        }
        host.carousel.core.on_timer(id)
    };
    dispatch(&state, actions);
}
