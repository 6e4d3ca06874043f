//! # feedgraph-engine
//!
//! The activity propagation engine.
//!
//! - [`Account`]: identity, photo, follow edges, and the account's own activity log
//! - [`Registry`]: arena owning every account; performs follow/post/like across
//!   accounts and fans activities out to followers
//! - [`SharedRegistry`]: a registry behind one lock, for callers that share a
//!   graph across threads
//!
//! Follow edges are stored as account names rather than references, so the
//! registry is the single owner of all account state.

#![deny(unsafe_code)]

pub mod account;
pub mod actions;
mod propagation;
pub mod registry;
pub mod shared;

pub use account::{Account, Photo};
pub use actions::{FollowOutcome, LikeOutcome};
pub use registry::Registry;
pub use shared::SharedRegistry;
