//! Settings loading.
//!
//! 1. Serialize [`FeedgraphSettings::default()`] to JSON
//! 2. Deep-merge `~/.feedgraph/settings.json` over it, if the file exists
//! 3. Apply `FEEDGRAPH_*` environment overrides
//! 4. Validate the result

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::FeedgraphSettings;

const ENV_LOG_LEVEL: &str = "FEEDGRAPH_LOG_LEVEL";
const ENV_TRENDING_LIMIT: &str = "FEEDGRAPH_TRENDING_LIMIT";
const ENV_MENU_TITLE: &str = "FEEDGRAPH_MENU_TITLE";

/// `~/.feedgraph/settings.json`, falling back to `/tmp` when `HOME` is unset.
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".feedgraph").join("settings.json")
}

/// Load from [`settings_path`].
pub fn load_settings() -> Result<FeedgraphSettings> {
    load_settings_from_path(&settings_path())
}

/// Load from `path` with env overrides applied.
///
/// A missing file yields defaults. Malformed JSON or an out-of-range value
/// in the file is an error; a malformed env var is logged and ignored.
pub fn load_settings_from_path(path: &Path) -> Result<FeedgraphSettings> {
    let defaults = serde_json::to_value(FeedgraphSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "reading settings file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "no settings file, using defaults");
        defaults
    };

    let mut settings: FeedgraphSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Merge `source` into `target`.
///
/// Objects merge per key, recursively. Anything else in `source` replaces
/// the target value outright. `null` in `source` leaves the target alone.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = match target_map.remove(&key) {
                    Some(target_val) => deep_merge(target_val, source_val),
                    None => source_val,
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `FEEDGRAPH_*` overrides.
pub fn apply_env_overrides(settings: &mut FeedgraphSettings) {
    if let Some(v) = read_env_string(ENV_LOG_LEVEL) {
        settings.logging.level = v;
    }
    if let Some(v) = read_env_usize(ENV_TRENDING_LIMIT, 1, 100) {
        settings.trending.limit = v;
    }
    if let Some(v) = read_env_string(ENV_MENU_TITLE) {
        settings.menu.title = v;
    }
}

/// Parse `val` as a `usize` in `min..=max`.
pub fn parse_usize_range(val: &str, min: usize, max: usize) -> Option<usize> {
    let n: usize = val.trim().parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn read_env_usize(name: &str, min: usize, max: usize) -> Option<usize> {
    let val = std::env::var(name).ok()?;
    let result = parse_usize_range(&val, min, max);
    if result.is_none() {
        warn!(key = name, value = %val, min, max, "ignoring out-of-range env var");
    }
    result
}

// ─── Tests ───
