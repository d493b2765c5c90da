//! Browser entry point for glide.
//!
//! Built with `wasm-pack build web --target web`. Loading the module binds the
//! default trigger (`[data="scroll-button"]`) to `#faq-section`:
//!
//! ```html
//! <script type="module">
//!   import init, { install } from "./pkg/glide_web.js";
//!   await init();
//!   // optional: rebind with a custom configuration
//!   install(`trigger_selector = "#to-pricing"\ntarget_id = "pricing"`);
//! </script>
//! ```
//!
//! If the module starts while the document is still loading, binding waits for
//! `DOMContentLoaded` so the trigger exists by the time it is looked up.

pub mod console;
pub mod host;

pub use host::WebHost;

use glide::{Binding, Config, Host};
use gloo::events::EventListener;
use std::{cell::RefCell, rc::Rc};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

thread_local! {
    /// The page's live binding; replacing it releases the previous listener.
    static BINDING: RefCell<Option<Binding<WebHost>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::init();

    let Some(host) = WebHost::new() else {
        warn!("no window or document, smooth scrolling disabled");
        return;
    };

    if host.document().ready_state() == "loading" {
        let document = host.document().clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            install_config(host, &Config::default());
        })
        .forget();
    } else {
        install_config(host, &Config::default());
    }
}

/// Rebind the scroll trigger with a TOML configuration.
///
/// Returns whether a trigger was found. A malformed configuration is thrown
/// back to JavaScript and leaves the current binding in place.
#[wasm_bindgen]
pub fn install(config_toml: &str) -> Result<bool, JsValue> {
    let config =
        Config::from_toml(config_toml).map_err(|err| JsValue::from_str(&format!("{err:#}")))?;
    let host = WebHost::new().ok_or_else(|| JsValue::from_str("no window or document"))?;
    Ok(install_config(host, &config))
}

fn install_config(host: WebHost, config: &Config) -> bool {
    let bound = BINDING.with(|slot| rebind(slot, Rc::new(host), config));
    if bound {
        info!(selector = %config.trigger_selector, "smooth scrolling enabled");
    }
    bound
}

/// Swap the binding in `slot` for one built from `config`. When the new
/// trigger is missing the previous binding stays live.
fn rebind<H: Host>(slot: &RefCell<Option<Binding<H>>>, host: Rc<H>, config: &Config) -> bool {
    match glide::bind(host, config) {
        Some(binding) => {
            // Dropping the previous binding cancels its animation.
            drop(slot.replace(Some(binding)));
            true
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide::SimHost;

    fn page() -> Rc<SimHost> {
        let host = Rc::new(SimHost::new());
        host.add_element("scroll-button", 0.0);
        host.match_selector(r#"[data="scroll-button"]"#, "scroll-button");
        host.add_element("faq-section", 800.0);
        host
    }

    #[test]
    fn missing_trigger_keeps_the_current_binding() {
        let host = page();
        let slot = RefCell::new(None);
        assert!(rebind(&slot, Rc::clone(&host), &Config::default()));

        let config = Config {
            trigger_selector: "#absent".to_string(),
            ..Config::default()
        };
        assert!(!rebind(&slot, Rc::clone(&host), &config));
        assert!(slot.borrow().is_some());
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.click(r#"[data="scroll-button"]"#), Some(true));
    }

    #[test]
    fn rebinding_replaces_the_listener_and_stops_its_animation() {
        let host = page();
        let slot = RefCell::new(None);
        assert!(rebind(&slot, Rc::clone(&host), &Config::default()));
        host.click(r#"[data="scroll-button"]"#);
        assert_eq!(host.pending_timers(), 1);

        assert!(rebind(&slot, Rc::clone(&host), &Config::default()));
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.pending_timers(), 0);
    }
}
