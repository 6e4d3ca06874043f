//! Text rendering of feeds and the trending list.

use std::fmt::Write as _;

use feedgraph_core::{AccountName, Activity, GraphError, Verb};
use feedgraph_engine::Registry;

use crate::commands::CommandError;

/// One feed line, phrased from `viewer`'s point of view.
pub fn describe(activity: &Activity, viewer: &str) -> String {
    let actor = activity.actor();
    let target = activity.target();
    match activity.verb() {
        Verb::Upload if activity.is_self_directed() => "You uploaded photo".to_string(),
        Verb::Upload => format!("{actor} uploaded photo"),
        Verb::Like => match (actor == viewer, target == viewer) {
            (true, true) => "You liked your photo".to_string(),
            (true, false) => format!("You liked {target}'s photo"),
            (false, true) => format!("{actor} liked your photo"),
            (false, false) => format!("{actor} liked {target}'s photo"),
        },
    }
}

/// `name`'s whole activity log, one line per entry, under a heading.
pub fn render_activities(registry: &Registry, name: &str) -> Result<String, CommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::InvalidInput);
    }
    let account = registry
        .find_by_name(name)
        .ok_or_else(|| GraphError::UnknownUser(AccountName::new(name)))?;

    let mut out = format!("\n{} activities:\n", account.name());
    for activity in account.activities() {
        let _ = writeln!(out, "{}", describe(activity, name));
    }
    Ok(out)
}

/// Top `limit` leaderboard positions that have at least one like.
///
/// Ranks are leaderboard positions, so a skipped zero-like position never
/// shifts the numbering of the ones after it.
pub fn render_trending(registry: &Registry, limit: usize) -> String {
    let mut out = String::from("Trending photos:\n");
    for (rank, account) in registry.leaderboard().into_iter().take(limit).enumerate() {
        let likes = account.photo().like_count();
        if likes != 0 {
            let _ = writeln!(out, "{}. {} photo got {likes} likes", rank + 1, account.name());
        }
    }
    out
}
