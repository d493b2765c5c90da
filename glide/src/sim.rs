//! A deterministic, in-memory [`Host`].
//!
//! [`SimHost`] stands in for a browser window: a virtual clock replaces wall
//! time, elements are plain `(id, top offset)` pairs and clicks are dispatched
//! by hand with [`SimHost::click`]. Nothing runs until the caller advances the
//! clock, which makes every animation step observable.
//!
//! ```ignore
//! let host = Rc::new(SimHost::new());
//! host.add_element("faq-section", 800.0);
//! let animator = Animator::new(Rc::clone(&host), Motion::default())?;
//! animator.scroll_to_id("faq-section")?;
//! host.run_until_idle();
//! assert_eq!(host.scroll_offset(), 800.0);
//! ```

use crate::host::{ClickEvent, ClickHandler, Host, TimerCallback};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
    time::Duration,
};

/// Upper bound on timers fired by a single [`SimHost::run_until_idle`].
const MAX_IDLE_TIMERS: usize = 100_000;

/// An element handle. Layout is looked up by id on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimElement {
    id: String,
}

impl SimElement {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

struct Scheduled {
    id: TimerId,
    due: Duration,
    callback: TimerCallback,
}

struct Registered {
    id: u64,
    element: SimElement,
    /// `None` while the handler is being invoked.
    handler: Option<ClickHandler>,
}

type Listeners = RefCell<Vec<Registered>>;

/// Unregisters its click handler when dropped.
pub struct SimListener {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for SimListener {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|l| l.id != self.id);
        }
    }
}

#[derive(Default)]
struct SimClick {
    prevented: Cell<bool>,
}

impl ClickEvent for SimClick {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

/// A pending step owns an [`Animator`](crate::Animator), which owns the host,
/// so a host dropped mid-animation is kept alive until its timers are drained
/// or cancelled. Dropping the [`Binding`](crate::Binding) cancels them.
#[derive(Default)]
pub struct SimHost {
    offset: Cell<f64>,
    writes: RefCell<Vec<(Duration, f64)>>,
    elements: RefCell<HashMap<String, f64>>,
    selectors: RefCell<HashMap<String, String>>,
    clock: Cell<Duration>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<Scheduled>>,
    listeners: Rc<Listeners>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, or move an existing one to a new top offset.
    pub fn add_element(&self, id: impl Into<String>, top: f64) {
        self.elements.borrow_mut().insert(id.into(), top);
    }

    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    /// Make `selector` resolve to the element with `id`.
    pub fn match_selector(&self, selector: impl Into<String>, id: impl Into<String>) {
        self.selectors.borrow_mut().insert(selector.into(), id.into());
    }

    /// Move the viewport without recording a write, as a user scroll would.
    pub fn jump(&self, offset: f64) {
        self.offset.set(offset);
    }

    /// Virtual time elapsed since the host was created.
    pub fn now(&self) -> Duration {
        self.clock.get()
    }

    /// Every offset written through [`Host::set_scroll_offset`], oldest first.
    pub fn scroll_writes(&self) -> Vec<f64> {
        self.writes.borrow().iter().map(|(_, offset)| *offset).collect()
    }

    /// Like [`SimHost::scroll_writes`], paired with the virtual time of each write.
    pub fn timeline(&self) -> Vec<(Duration, f64)> {
        self.writes.borrow().clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatch a click to the element matching `selector`.
    ///
    /// Returns `None` when nothing matches, otherwise whether any handler
    /// prevented the default action.
    pub fn click(&self, selector: &str) -> Option<bool> {
        let element = self.query_selector(selector)?;
        let click = SimClick::default();
        let event: &dyn ClickEvent = &click;

        let ids: Vec<u64> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.element == element)
            .map(|l| l.id)
            .collect();

        for id in ids {
            let handler = self
                .listeners
                .borrow_mut()
                .iter_mut()
                .find(|l| l.id == id)
                .and_then(|l| l.handler.take());
            let Some(mut handler) = handler else {
                continue;
            };

            handler(event);

            // The listener may have been dropped by its own handler.
            if let Some(slot) = self.listeners.borrow_mut().iter_mut().find(|l| l.id == id) {
                slot.handler = Some(handler);
            }
        }

        Some(click.prevented.get())
    }

    /// Move the clock forward by `delay`, firing every timer that falls due.
    ///
    /// Timers scheduled by a callback fire in the same call if they are due
    /// before the new time. Returns the number of timers fired.
    pub fn advance(&self, delay: Duration) -> usize {
        let deadline = self.clock.get() + delay;
        let mut fired = 0;
        while let Some(timer) = self.pop_next(Some(deadline)) {
            self.fire(timer);
            fired += 1;
        }
        self.clock.set(deadline);
        fired
    }

    /// Fire timers in due order until none are left. Returns the number fired.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.pop_next(None) {
            self.fire(timer);
            fired += 1;
            if fired >= MAX_IDLE_TIMERS {
                tracing::warn!(fired, "timer queue did not drain, giving up");
                break;
            }
        }
        fired
    }

    fn fire(&self, timer: Scheduled) {
        self.clock.set(self.clock.get().max(timer.due));
        (timer.callback)();
    }

    /// Remove the earliest timer, ties broken by scheduling order.
    fn pop_next(&self, deadline: Option<Duration>) -> Option<Scheduled> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| deadline.map_or(true, |d| t.due <= d))
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(i, _)| i)?;
        Some(timers.remove(index))
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Host for SimHost {
    type Element = SimElement;
    type Timer = TimerId;
    type Listener = SimListener;

    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn set_scroll_offset(&self, offset: f64) {
        self.offset.set(offset);
        self.writes.borrow_mut().push((self.clock.get(), offset));
    }

    fn query_selector(&self, selector: &str) -> Option<SimElement> {
        let id = self.selectors.borrow().get(selector).cloned()?;
        self.element_by_id(&id)
    }

    fn element_by_id(&self, id: &str) -> Option<SimElement> {
        self.elements
            .borrow()
            .contains_key(id)
            .then(|| SimElement { id: id.to_string() })
    }

    /// Detached elements report 0, like `offsetTop` does in a browser.
    fn element_top_offset(&self, element: &SimElement) -> f64 {
        self.elements
            .borrow()
            .get(&element.id)
            .copied()
            .unwrap_or(0.0)
    }

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id());
        self.timers.borrow_mut().push(Scheduled {
            id,
            due: self.clock.get() + delay,
            callback,
        });
        id
    }

    fn cancel(&self, timer: TimerId) {
        self.timers.borrow_mut().retain(|t| t.id != timer);
    }

    fn on_click(&self, element: &SimElement, handler: ClickHandler) -> SimListener {
        let id = self.next_id();
        self.listeners.borrow_mut().push(Registered {
            id,
            element: element.clone(),
            handler: Some(handler),
        });
        SimListener {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}
