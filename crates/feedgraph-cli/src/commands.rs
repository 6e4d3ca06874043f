//! Text commands.
//!
//! Commands are whitespace-separated words:
//!
//! | Command | Form |
//! |---|---|
//! | setup | `<A> follows <B>` |
//! | like | `<A> likes <B> photo` |
//! | upload | `<A> uploaded photo` |
//!
//! Parsing is pure. Applying a parsed command runs the matching
//! [`Registry`] operation.

use feedgraph_core::{AccountName, GraphError};
use feedgraph_engine::Registry;
use thiserror::Error;
use tracing::debug;

const KEY_FOLLOW: &str = "follows";
const KEY_LIKE: &str = "likes";
const KEY_UPLOAD: &str = "uploaded";
const KEY_PHOTO: &str = "photo";

/// Why a command failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Empty command, or the wrong number of words.
    #[error("invalid input")]
    InvalidInput,
    /// A keyword is missing, misplaced, or conflicting.
    #[error("invalid keyword")]
    InvalidKeyword,
    /// The command parsed but the graph refused it.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CommandError {
    /// Stable identifier for structured logs.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InvalidKeyword => "invalid_keyword",
            Self::Graph(err) => err.error_kind(),
        }
    }
}

/// `<A> follows <B>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    /// Account that starts following.
    pub follower: AccountName,
    /// Account being followed.
    pub target: AccountName,
}

/// A parsed user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// `<A> uploaded photo`
    Upload {
        /// Account posting its photo.
        poster: AccountName,
    },
    /// `<A> likes <B> photo`
    Like {
        /// Account doing the liking.
        actor: AccountName,
        /// Owner of the liked photo.
        target: AccountName,
    },
}

impl Action {
    /// Run the action against `registry`.
    pub fn apply(&self, registry: &mut Registry) -> Result<(), GraphError> {
        match self {
            Self::Upload { poster } => registry.post(poster).map(|_| ()),
            Self::Like { actor, target } => registry.like(actor, target).map(|_| ()),
        }
    }
}

fn words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse a setup line.
pub fn parse_setup(line: &str) -> Result<Setup, CommandError> {
    let words = words(line);
    if words.len() != 3 {
        return Err(CommandError::InvalidInput);
    }
    if words[1] != KEY_FOLLOW {
        return Err(CommandError::InvalidKeyword);
    }
    Ok(Setup {
        follower: AccountName::new(words[0]),
        target: AccountName::new(words[2]),
    })
}

/// Parse an action line.
///
/// `likes` and `uploaded` are looked up as whole words anywhere in the line
/// to pick the form; the form then fixes where each keyword must sit.
pub fn parse_action(line: &str) -> Result<Action, CommandError> {
    let words = words(line);
    if words.is_empty() {
        return Err(CommandError::InvalidInput);
    }

    let likes = words.contains(&KEY_LIKE);
    let uploaded = words.contains(&KEY_UPLOAD);
    match (likes, uploaded) {
        (true, false) => {
            let &[actor, KEY_LIKE, target, KEY_PHOTO] = &words[..] else {
                return Err(if words.len() == 4 {
                    CommandError::InvalidKeyword
                } else {
                    CommandError::InvalidInput
                });
            };
            Ok(Action::Like {
                actor: AccountName::new(actor),
                target: AccountName::new(target),
            })
        }
        (false, true) => {
            let &[poster, KEY_UPLOAD, KEY_PHOTO] = &words[..] else {
                return Err(if words.len() == 3 {
                    CommandError::InvalidKeyword
                } else {
                    CommandError::InvalidInput
                });
            };
            Ok(Action::Upload {
                poster: AccountName::new(poster),
            })
        }
        _ => Err(CommandError::InvalidKeyword),
    }
}

/// Parse and apply a setup line. Either account is created on first mention.
pub fn handle_setup(registry: &mut Registry, line: &str) -> Result<(), CommandError> {
    let setup = parse_setup(line).inspect_err(|err| log_rejected("setup", err))?;
    for name in [&setup.follower, &setup.target] {
        if registry.record_if_absent(name) {
            debug!(account = %name, "account created");
        }
    }
    registry
        .follow(&setup.follower, &setup.target)
        .map(|_| ())
        .map_err(CommandError::from)
}

/// Parse and apply an action line. Every name must already exist.
pub fn handle_action(registry: &mut Registry, line: &str) -> Result<(), CommandError> {
    let action = parse_action(line).inspect_err(|err| log_rejected("action", err))?;
    action.apply(registry).map_err(CommandError::from)
}

fn log_rejected(command: &'static str, err: &CommandError) {
    debug!(command, kind = err.error_kind(), "command not understood");
}

// ─── Tests ───

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn name(s: &str) -> AccountName {
        AccountName::new(s)
    }

    #[test]
    fn setup_parses_three_words() {
        assert_eq!(
            parse_setup("Alice follows Bob").unwrap(),
            Setup {
                follower: name("Alice"),
                target: name("Bob"),
            }
        );
    }

    #[test]
    fn setup_rejects_bad_shapes() {
        assert_eq!(parse_setup(""), Err(CommandError::InvalidInput));
        assert_eq!(parse_setup("Alice follows"), Err(CommandError::InvalidInput));
        assert_eq!(
            parse_setup("Alice follows Bob now"),
            Err(CommandError::InvalidInput)
        );
        assert_eq!(parse_setup("Alice likes Bob"), Err(CommandError::InvalidKeyword));
    }

    #[test]
    fn action_parses_both_forms() {
        assert_eq!(
            parse_action("Bob likes Alice photo").unwrap(),
            Action::Like {
                actor: name("Bob"),
                target: name("Alice"),
            }
        );
        assert_eq!(
            parse_action("Alice uploaded photo").unwrap(),
            Action::Upload { poster: name("Alice") }
        );
    }

    #[test]
    fn action_keyword_errors() {
        assert_eq!(
            parse_action("Alice likes uploaded photo"),
            Err(CommandError::InvalidKeyword)
        );
        assert_eq!(parse_action("Alice posted photo"), Err(CommandError::InvalidKeyword));
        assert_eq!(
            parse_action("Alice likes Bob picture"),
            Err(CommandError::InvalidKeyword)
        );
        assert_eq!(
            parse_action("likes Alice Bob photo"),
            Err(CommandError::InvalidKeyword)
        );
        assert_eq!(
            parse_action("Alice uploaded picture"),
            Err(CommandError::InvalidKeyword)
        );
    }

    #[test]
    fn action_word_count_errors() {
        assert_eq!(parse_action(""), Err(CommandError::InvalidInput));
        assert_eq!(parse_action("   "), Err(CommandError::InvalidInput));
        assert_eq!(parse_action("Alice likes"), Err(CommandError::InvalidInput));
        assert_eq!(
            parse_action("Alice likes Bob photo twice"),
            Err(CommandError::InvalidInput)
        );
        assert_eq!(parse_action("Alice uploaded"), Err(CommandError::InvalidInput));
    }

    #[test]
    fn liked_is_not_a_keyword() {
        assert_eq!(
            parse_action("Alice liked Bob photo"),
            Err(CommandError::InvalidKeyword)
        );
    }

    #[test]
    fn setup_creates_accounts_then_follows() {
        let mut reg = Registry::new();
        handle_setup(&mut reg, "Alice follows Bob").unwrap();
        assert_eq!(reg.len(), 2);
        assert!(reg.has_followed("Alice", "Bob"));

        assert_matches!(
            handle_setup(&mut reg, "Alice follows Bob"),
            Err(CommandError::Graph(GraphError::AlreadyFollowed))
        );
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn self_follow_still_records_the_account() {
        let mut reg = Registry::new();
        assert_matches!(
            handle_setup(&mut reg, "Alice follows Alice"),
            Err(CommandError::Graph(GraphError::SameAccount))
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn bad_setup_creates_nothing() {
        let mut reg = Registry::new();
        assert_matches!(
            handle_setup(&mut reg, "Alice likes Bob"),
            Err(CommandError::InvalidKeyword)
        );
        assert!(reg.is_empty());
    }

    #[test]
    fn actions_need_known_users() {
        let mut reg = Registry::new();
        assert_matches!(
            handle_action(&mut reg, "Zed uploaded photo"),
            Err(CommandError::Graph(GraphError::UnknownUser(n))) if n == "Zed"
        );
        handle_setup(&mut reg, "Bob follows Alice").unwrap();
        assert_matches!(
            handle_action(&mut reg, "Bob likes Zed photo"),
            Err(CommandError::Graph(GraphError::UnknownUser(n))) if n == "Zed"
        );
    }

    #[test]
    fn actions_reach_the_registry() {
        let mut reg = Registry::new();
        handle_setup(&mut reg, "Bob follows Alice").unwrap();
        handle_action(&mut reg, "Alice uploaded photo").unwrap();
        handle_action(&mut reg, "Bob likes Alice photo").unwrap();

        assert_eq!(reg.find_by_name("Alice").unwrap().photo().like_count(), 1);
        assert_matches!(
            handle_action(&mut reg, "Bob likes Alice photo"),
            Err(CommandError::Graph(GraphError::LikedTwice))
        );
    }

    #[test]
    fn graph_errors_keep_their_message() {
        let err = CommandError::from(GraphError::NotFollowing {
            target: name("Alice"),
        });
        assert_eq!(err.to_string(), "unable to like Alice's photo");
        assert_eq!(err.error_kind(), "not_following");
        assert_eq!(CommandError::InvalidInput.to_string(), "invalid input");
        assert_eq!(CommandError::InvalidKeyword.error_kind(), "invalid_keyword");
    }
}
