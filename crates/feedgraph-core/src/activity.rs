//! Activity records.
//!
//! An [`Activity`] is an immutable `(actor, verb, target)` triple. Equality is
//! structural over the three fields, so two activities created at different
//! times by different code paths are "the same activity" whenever they name
//! the same accounts and verb. Propagation and the duplicate-like check both
//! rely on that.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::names::AccountName;

/// The kind of action an activity records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    /// A photo upload.
    Upload,
    /// A photo like.
    Like,
}

impl Verb {
    /// Wire/display string (`"upload"` or `"like"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Like => "like",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded action, linking the account that did it to the account it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    actor: AccountName,
    verb: Verb,
    target: AccountName,
}

impl Activity {
    /// Build an activity from its parts.
    #[must_use]
    pub fn new(actor: AccountName, verb: Verb, target: AccountName) -> Self {
        Self {
            actor,
            verb,
            target,
        }
    }

    /// `(actor, upload, target)`.
    #[must_use]
    pub fn upload(actor: AccountName, target: AccountName) -> Self {
        Self::new(actor, Verb::Upload, target)
    }

    /// `(actor, like, target)`.
    #[must_use]
    pub fn like(actor: AccountName, target: AccountName) -> Self {
        Self::new(actor, Verb::Like, target)
    }

    /// The account that performed the action.
    #[must_use]
    pub fn actor(&self) -> &AccountName {
        &self.actor
    }

    /// What was done.
    #[must_use]
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// The account the action concerns.
    #[must_use]
    pub fn target(&self) -> &AccountName {
        &self.target
    }

    /// Whether actor and target are the same account.
    #[must_use]
    pub fn is_self_directed(&self) -> bool {
        self.actor == self.target
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.actor, self.verb, self.target)
    }
}
