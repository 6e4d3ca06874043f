//! Fan-out of actions to followers' logs.
//!
//! Uploads are delivered to every follower as a fresh activity whose target
//! is the follower. Likes are delivered as the original activity, unless the
//! follower's log already ends with an identical one. Only the tail is
//! checked; an identical activity further back does not block delivery.

use feedgraph_core::{AccountName, Activity};
use tracing::trace;

use crate::registry::Registry;

/// Counts from one fan-out, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Delivery {
    pub delivered: usize,
    pub suppressed: usize,
}

/// Whether a like activity should be appended to `follower`'s log.
pub(crate) fn should_deliver_like(
    log_tail: Option<&Activity>,
    follower: &AccountName,
    activity: &Activity,
) -> bool {
    match log_tail {
        None => follower != activity.actor(),
        Some(last) => last != activity,
    }
}

impl Registry {
    /// Give every follower of the account at `poster` an `(poster, upload, follower)` entry.
    pub(crate) fn notify_followers_upload(&mut self, poster: usize) -> Delivery {
        let poster_name = self.accounts[poster].name().clone();
        let followers = self.accounts[poster].followers().to_vec();
        let mut delivery = Delivery::default();

        for follower in followers {
            let Some(idx) = self.is_account_exist(&follower) else {
                continue;
            };
            let activity = Activity::upload(poster_name.clone(), follower.clone());
            trace!(poster = %poster_name, follower = %follower, "upload delivered");
            self.accounts[idx].append(activity);
            delivery.delivered += 1;
        }

        delivery
    }

    /// Deliver `activity` to every follower of the account at `liker`, skipping
    /// followers whose log already ends with it.
    pub(crate) fn notify_followers_like(&mut self, liker: usize, activity: &Activity) -> Delivery {
        let followers = self.accounts[liker].followers().to_vec();
        let mut delivery = Delivery::default();

        for follower in followers {
            let Some(idx) = self.is_account_exist(&follower) else {
                continue;
            };
            let account = &mut self.accounts[idx];
            if should_deliver_like(account.last_activity(), &follower, activity) {
                trace!(follower = %follower, %activity, "like delivered");
                account.append(activity.clone());
                delivery.delivered += 1;
            } else {
                trace!(follower = %follower, %activity, "duplicate like suppressed");
                delivery.suppressed += 1;
            }
        }

        delivery
    }
}
