use anyhow::Result;
use glide::Config;

/// Render the effective configuration as TOML.
pub fn run(config: &Config) -> Result<String> {
    config.to_toml()
}
