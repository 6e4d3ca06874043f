//! # feedgraph-settings
//!
//! Configuration with layered sources for feedgraph.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`FeedgraphSettings::default()`]
//! 2. **User file**: `~/.feedgraph/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `FEEDGRAPH_*` overrides (highest priority)
//!
//! Command-line flags are applied by the binary on top of the loaded value.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = FeedgraphSettings::default();
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.trending.limit, 3);
        assert_eq!(settings.menu.title, "Activity Reporter");
        assert!(settings.validate().is_ok());
    }
}
