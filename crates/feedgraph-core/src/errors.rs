//! Error hierarchy for graph operations.
//!
//! Every failure here is expected and user facing: the command layer prints
//! the message and carries on. None of them leave the graph partially
//! mutated, since each operation validates before it writes.

use thiserror::Error;

use crate::names::AccountName;

/// Recoverable failures of follow, post, like, and registry insertion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An account tried to follow itself.
    #[error("a user cannot follow themselves")]
    SameAccount,

    /// The follow relationship already exists.
    #[error("you already followed the user")]
    AlreadyFollowed,

    /// The account already posted its photo.
    #[error("you cannot upload more than once")]
    UploadTwice,

    /// Self-like without an uploaded photo.
    #[error("you don't have a photo")]
    NoPhoto,

    /// The identical like activity is already in the actor's log.
    #[error("you already liked the photo")]
    LikedTwice,

    /// Cross-like without following the target.
    #[error("unable to like {target}'s photo")]
    NotFollowing {
        /// The account whose photo could not be liked.
        target: AccountName,
    },

    /// Cross-like of an account that has not posted.
    #[error("{target} doesn't have a photo")]
    TargetHasNoPhoto {
        /// The account without a photo.
        target: AccountName,
    },

    /// Registry insertion with a name that is already taken.
    #[error("username already exist")]
    UserExist,

    /// Lookup of a name the registry does not know.
    #[error("unknown user {0}")]
    UnknownUser(AccountName),
}

impl GraphError {
    /// Short classification string for logging.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::SameAccount => "same_account",
            Self::AlreadyFollowed => "already_followed",
            Self::UploadTwice => "upload_twice",
            Self::NoPhoto => "no_photo",
            Self::LikedTwice => "liked_twice",
            Self::NotFollowing { .. } => "not_following",
            Self::TargetHasNoPhoto { .. } => "target_has_no_photo",
            Self::UserExist => "user_exist",
            Self::UnknownUser(_) => "unknown_user",
        }
    }
}
