//! The environment a scroll animation runs in.
//!
//! Everything the animation needs from the outside world (the scroll position,
//! element lookups, timers and click listeners) goes through [`Host`]. The
//! browser implementation lives in `glide_web`; [`crate::sim::SimHost`] is a
//! deterministic stand-in for tests and the CLI.
//!
//! Hosts are single threaded. Callbacks handed to [`Host::schedule`] and
//! [`Host::on_click`] are invoked later from the host's event loop, never from
//! inside the call that registers them.

use std::time::Duration;

/// A click delivered to a handler registered with [`Host::on_click`].
pub trait ClickEvent {
    /// Suppress the host's default action for this click (e.g. anchor navigation).
    fn prevent_default(&self);
}

/// Handler invoked for every click on a bound element.
pub type ClickHandler = Box<dyn FnMut(&dyn ClickEvent)>;

/// One-shot callback run by [`Host::schedule`].
pub type TimerCallback = Box<dyn FnOnce()>;

pub trait Host: 'static {
    /// Handle to a node in the document.
    type Element: Clone + 'static;
    /// Handle to a scheduled callback, consumed by [`Host::cancel`].
    type Timer: 'static;
    /// Keeps a click listener registered for as long as it is alive.
    type Listener: 'static;

    /// Current vertical scroll offset of the viewport, in pixels.
    fn scroll_offset(&self) -> f64;

    /// Move the viewport to the vertical offset, in pixels.
    fn set_scroll_offset(&self, offset: f64);

    /// First element matching a CSS selector.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Element with the given id attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Vertical offset of the element's top edge, in pixels.
    fn element_top_offset(&self, element: &Self::Element) -> f64;

    /// Run `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Timer;

    /// Cancel a scheduled callback. Cancelling one that already ran is a no-op.
    fn cancel(&self, timer: Self::Timer);

    /// Register `handler` for clicks on `element`.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Self::Listener;
}
