//! Settings type definitions.
//!
//! Field names are camelCase in JSON. Every section is `#[serde(default)]`,
//! so a settings file only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Root settings type.
///
/// ```json
/// {
///   "logging": { "level": "feedgraph_engine=debug" },
///   "trending": { "limit": 5 }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedgraphSettings {
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Trending (leaderboard) output.
    pub trending: TrendingSettings,
    /// Interactive menu text.
    pub menu: MenuSettings,
}

impl FeedgraphSettings {
    /// Reject values the command layer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.trending.limit == 0 {
            return Err(SettingsError::InvalidValue(
                "trending.limit must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Trending output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendingSettings {
    /// How many leaderboard positions to consider.
    pub limit: usize,
}

impl Default for TrendingSettings {
    fn default() -> Self {
        Self { limit: 3 }
    }
}

/// Interactive menu text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuSettings {
    /// Heading printed above the menu options.
    pub title: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            title: "Activity Reporter".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let settings: FeedgraphSettings =
            serde_json::from_str(r#"{"trending": {"limit": 10}}"#).unwrap();
        assert_eq!(settings.trending.limit, 10);
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.menu.title, "Activity Reporter");
    }

    #[test]
    fn zero_limit_is_invalid() {
        let mut settings = FeedgraphSettings::default();
        settings.trending.limit = 0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidValue(_))
        ));
    }

    #[test]
    fn blank_level_is_invalid() {
        let mut settings = FeedgraphSettings::default();
        settings.logging.level = "  ".to_string();
        assert!(settings.validate().is_err());
    }
}
