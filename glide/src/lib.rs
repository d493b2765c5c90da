//! Smooth scrolling from a trigger control to a page section.
//!
//! A click on the trigger (by default `[data="scroll-button"]`) animates the
//! viewport toward the target element (by default `#faq-section`). Every
//! [`Motion::interval`] the viewport travels `1 / damping` of the remaining
//! distance, then snaps onto the target once a step would move it by no more
//! than [`Motion::threshold`] pixels.
//!
//! # Layout
//!
//! - [`step`] - the pure step function, [`Motion::next_action`]
//! - [`animator`] - one animation session and its single pending timer
//! - [`binder`] - click wiring between trigger and animator
//! - [`host`] - the [`Host`] capability every environment implements
//! - [`sim`] - a deterministic [`Host`] with a virtual clock
//! - [`config`] - TOML configuration with defaults for every field
//!
//! The browser [`Host`] lives in the `glide_web` crate.

pub mod animator;
pub mod binder;
pub mod config;
pub mod error;
pub mod host;
pub mod sim;
pub mod step;

pub use animator::Animator;
pub use binder::{bind, try_bind, Binding};
pub use config::Config;
pub use error::Error;
pub use host::{ClickEvent, Host};
pub use sim::SimHost;
pub use step::{Motion, NextAction};
