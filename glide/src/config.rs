//! Configuration for the scroll trigger, its target and the animation curve.
//!
//! Every field has a default, so an empty file (or no file at all) binds the
//! `[data="scroll-button"]` control to the `#faq-section` element with the
//! standard motion. Pages that want something else can ship a TOML file:
//!
//! ```toml
//! trigger_selector = 'a[data="scroll-button"]'
//! target_id = "pricing"
//!
//! [motion]
//! damping = 6.0
//! interval_ms = 16
//! ```

use crate::step::Motion;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selector of the control that starts the animation.
pub const DEFAULT_TRIGGER_SELECTOR: &str = r#"[data="scroll-button"]"#;

/// Id of the element the animation scrolls to.
pub const DEFAULT_TARGET_ID: &str = "faq-section";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CSS selector; the first match is bound.
    #[serde(default = "default_trigger_selector")]
    pub trigger_selector: String,

    /// Id attribute of the scroll target, without the leading `#`.
    #[serde(default = "default_target_id")]
    pub target_id: String,

    pub motion: Motion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger_selector: default_trigger_selector(),
            target_id: default_target_id(),
            motion: Motion::default(),
        }
    }
}

fn default_trigger_selector() -> String {
    DEFAULT_TRIGGER_SELECTOR.to_string()
}

fn default_target_id() -> String {
    DEFAULT_TARGET_ID.to_string()
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source).context("Failed to parse config")?;
        config.motion.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .motion
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize config")
    }
}
