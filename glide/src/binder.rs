//! Attaching the scroll behaviour to its trigger control.
//!
//! [`try_bind`] looks up the trigger once and registers a click handler on it.
//! Each click suppresses the control's default action (usually an anchor jump)
//! and animates toward the configured target, resolved afresh on every click.
//! A page without the trigger or the target is left exactly as it is: the
//! behaviour is an enhancement, so both cases are logged and skipped.

use crate::{
    animator::Animator,
    config::Config,
    error::Error,
    host::{ClickEvent, Host},
};
use std::rc::Rc;
use tracing::{debug, warn};

/// A live trigger binding. Dropping it cancels any animation in flight and
/// lets the host release the listener.
pub struct Binding<H: Host> {
    animator: Animator<H>,
    _listener: H::Listener,
}

impl<H: Host> Drop for Binding<H> {
    fn drop(&mut self) {
        self.animator.stop();
    }
}

impl<H: Host> Binding<H> {
    /// The animation session driven by clicks on the trigger.
    pub fn animator(&self) -> &Animator<H> {
        &self.animator
    }
}

/// Bind the trigger matching `config.trigger_selector`.
///
/// Returns [`Error::InvalidMotion`] or [`Error::TriggerNotFound`] without
/// registering anything.
pub fn try_bind<H: Host>(host: Rc<H>, config: &Config) -> Result<Binding<H>, Error> {
    let animator = Animator::new(Rc::clone(&host), config.motion)?;
    let trigger = host
        .query_selector(&config.trigger_selector)
        .ok_or_else(|| Error::TriggerNotFound {
            selector: config.trigger_selector.clone(),
        })?;

    let on_click = animator.clone();
    let target_id = config.target_id.clone();

    let listener = host.on_click(
        &trigger,
        Box::new(move |event: &dyn ClickEvent| {
            event.prevent_default();
            if let Err(err) = on_click.scroll_to_id(&target_id) {
                warn!("{err}, ignoring click");
            }
        }),
    );

    debug!(
        selector = %config.trigger_selector,
        target = %config.target_id,
        "scroll trigger bound"
    );

    Ok(Binding {
        animator,
        _listener: listener,
    })
}

/// Like [`try_bind`], but a missing trigger is logged and yields `None`.
pub fn bind<H: Host>(host: Rc<H>, config: &Config) -> Option<Binding<H>> {
    match try_bind(host, config) {
        Ok(binding) => Some(binding),
        Err(err) => {
            warn!("{err}, smooth scrolling disabled");
            None
        },
    }
}
