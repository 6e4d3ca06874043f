//! Follow, post, and like.
//!
//! Each operation resolves the names involved, validates every precondition,
//! and only then mutates. A rejected operation leaves the registry exactly as
//! it was.

use feedgraph_core::{AccountName, Activity, GraphError};
use tracing::{debug, instrument};

use crate::registry::Registry;

/// Both sides of a new follow edge.
#[derive(Clone, Copy, Debug)]
pub struct FollowOutcome<'a> {
    /// The follower's updated following list.
    pub following: &'a [AccountName],
    /// The target's updated follower list.
    pub followers: &'a [AccountName],
}

/// Activity logs of both parties after a like.
#[derive(Clone, Copy, Debug)]
pub struct LikeOutcome<'a> {
    pub actor_log: &'a [Activity],
    pub target_log: &'a [Activity],
}

fn rejected(op: &'static str, err: GraphError) -> GraphError {
    debug!(op, kind = err.error_kind(), error = %err, "operation rejected");
    err
}

impl Registry {
    /// Make `follower` follow `target`. No activity is recorded.
    #[instrument(level = "debug", skip(self))]
    pub fn follow(&mut self, follower: &str, target: &str) -> Result<FollowOutcome<'_>, GraphError> {
        let f = self.resolve(follower)?;
        let t = self.resolve(target)?;

        if self.accounts[f].is_same_account(&self.accounts[t]) {
            return Err(rejected("follow", GraphError::SameAccount));
        }
        if self.accounts[f].has_followed(&self.accounts[t]) {
            return Err(rejected("follow", GraphError::AlreadyFollowed));
        }

        let follower_name = self.accounts[f].name().clone();
        let target_name = self.accounts[t].name().clone();
        self.accounts[t].add_follower(follower_name);
        self.accounts[f].add_following(target_name);
        debug!("follow recorded");

        Ok(FollowOutcome {
            following: self.accounts[f].following(),
            followers: self.accounts[t].followers(),
        })
    }

    /// Upload `poster`'s one photo and notify its followers.
    #[instrument(level = "debug", skip(self))]
    pub fn post(&mut self, poster: &str) -> Result<&[Activity], GraphError> {
        let p = self.resolve(poster)?;

        if self.accounts[p].has_posted() {
            return Err(rejected("post", GraphError::UploadTwice));
        }

        let name = self.accounts[p].name().clone();
        let account = &mut self.accounts[p];
        account.photo_mut().mark_uploaded();
        account.append(Activity::upload(name.clone(), name));

        let delivery = self.notify_followers_upload(p);
        debug!(followers = delivery.delivered, "upload recorded");

        Ok(self.accounts[p].activities())
    }

    /// `actor` likes `target`'s photo.
    ///
    /// A self-like only needs the actor to have posted. A cross-like needs the
    /// actor to follow the target and the target to have posted, and lands in
    /// both logs. Either way the like is refused if the identical activity is
    /// already in the actor's log, is fanned out to the actor's followers, and
    /// adds the actor to the target's like list.
    #[instrument(level = "debug", skip(self))]
    pub fn like(&mut self, actor: &str, target: &str) -> Result<LikeOutcome<'_>, GraphError> {
        let a = self.resolve(actor)?;
        let t = self.resolve(target)?;
        let actor_name = self.accounts[a].name().clone();
        let target_name = self.accounts[t].name().clone();

        let activity = if a == t {
            if !self.accounts[a].has_posted() {
                return Err(rejected("like", GraphError::NoPhoto));
            }
            let activity = Activity::like(actor_name.clone(), target_name);
            if self.accounts[a].has_logged(&activity) {
                return Err(rejected("like", GraphError::LikedTwice));
            }
            self.accounts[a].append(activity.clone());
            activity
        } else {
            if !self.accounts[a].has_followed(&self.accounts[t]) {
                return Err(rejected(
                    "like",
                    GraphError::NotFollowing {
                        target: target_name,
                    },
                ));
            }
            if !self.accounts[t].has_posted() {
                return Err(rejected(
                    "like",
                    GraphError::TargetHasNoPhoto {
                        target: target_name,
                    },
                ));
            }
            let activity = Activity::like(actor_name.clone(), target_name);
            if self.accounts[a].has_logged(&activity) {
                return Err(rejected("like", GraphError::LikedTwice));
            }
            self.accounts[a].append(activity.clone());
            self.accounts[t].append(activity.clone());
            activity
        };

        let delivery = self.notify_followers_like(a, &activity);
        self.accounts[t].photo_mut().record_like(actor_name);
        debug!(
            delivered = delivery.delivered,
            suppressed = delivery.suppressed,
            likes = self.accounts[t].photo().like_count(),
            "like recorded"
        );

        Ok(LikeOutcome {
            actor_log: self.accounts[a].activities(),
            target_log: self.accounts[t].activities(),
        })
    }

    /// Whether `follower` follows `target`. Unknown names never follow anything.
    pub fn has_followed(&self, follower: &str, target: &str) -> bool {
        match (self.find_by_name(follower), self.find_by_name(target)) {
            (Some(f), Some(t)) => f.has_followed(t),
            _ => false,
        }
    }

    /// Whether `name` has posted. Unknown names have not.
    pub fn has_posted(&self, name: &str) -> bool {
        self.find_by_name(name).is_some_and(|acc| acc.has_posted())
    }
}
