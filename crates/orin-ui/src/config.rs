//! Scroll tuning shipped with the bundle.

use orin_core::{ResultExt, ScrollConfig};

/// `scroll.toml`, embedded at compile time.
pub const EMBEDDED_SCROLL_TOML: &str = include_str!("../scroll.toml");

/// Parse the embedded tuning, falling back to the defaults (with a warning)
/// if it does not parse or validate.
#[must_use]
pub fn load_scroll_config() -> ScrollConfig {
    ScrollConfig::from_toml_str(EMBEDDED_SCROLL_TOML).or_default_logged(ScrollConfig::default())
}
