//! Timer-driven scroll animation.
//!
//! An [`Animator`] is one animation session. It owns the handle of its single
//! pending step, so at most one step is ever queued: every new step (or a new
//! [`Animator::scroll_to`]) cancels the previous handle before arming the next.
//!
//! ```text
//!            scroll_to                |delta| > threshold
//!   Idle ─────────────────► Stepping ◄──────────────┐
//!    ▲                        │  └──────────────────┘
//!    └────────────────────────┘
//!        |delta| <= threshold: snap to target
//! ```
//!
//! The target's top offset is re-read on every step, so a target that moves
//! while the page is still laying out is followed rather than overshot.

use crate::{
    error::Error,
    host::Host,
    step::{Motion, NextAction},
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, trace};

pub struct Animator<H: Host> {
    host: Rc<H>,
    motion: Motion,
    pending: Rc<RefCell<Option<H::Timer>>>,
}

impl<H: Host> Clone for Animator<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            motion: self.motion,
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<H: Host> Animator<H> {
    /// Returns [`Error::InvalidMotion`] for a tuning that could never settle.
    pub fn new(host: Rc<H>, motion: Motion) -> Result<Self, Error> {
        motion.validate()?;
        Ok(Self {
            host,
            motion,
            pending: Rc::new(RefCell::new(None)),
        })
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Start animating toward `target`, superseding any animation in flight.
    ///
    /// The first step runs immediately; later steps run from the host's timers.
    pub fn scroll_to(&self, target: H::Element) {
        debug!(
            from = self.host.scroll_offset(),
            to = self.host.element_top_offset(&target),
            "starting scroll animation"
        );
        self.step(target);
    }

    /// Resolve the element with `id` and start animating toward it.
    ///
    /// Returns [`Error::TargetNotFound`] without touching the viewport or any
    /// pending step when the element is absent.
    pub fn scroll_to_id(&self, id: &str) -> Result<(), Error> {
        let target = self
            .host
            .element_by_id(id)
            .ok_or_else(|| Error::TargetNotFound { id: id.to_string() })?;
        self.scroll_to(target);
        Ok(())
    }

    /// Whether a step is queued.
    pub fn is_animating(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Cancel the queued step, leaving the viewport where it is.
    pub fn stop(&self) {
        let timer = self.pending.borrow_mut().take();
        if let Some(timer) = timer {
            self.host.cancel(timer);
        }
    }

    fn step(&self, target: H::Element) {
        // When called from a timer this cancels the handle that just fired,
        // which hosts treat as a no-op.
        self.stop();

        let current = self.host.scroll_offset();
        let top = self.host.element_top_offset(&target);
        let action = self.motion.next_action(current, top);
        self.host.set_scroll_offset(action.offset());

        match action {
            NextAction::Continue(offset) => {
                trace!(offset, target = top, "scroll step");
                let next = self.clone();
                let timer = self
                    .host
                    .schedule(self.motion.interval(), Box::new(move || next.step(target)));
                *self.pending.borrow_mut() = Some(timer);
            },
            NextAction::Done(offset) => {
                debug!(offset, "scroll animation finished");
            },
        }
    }
}
