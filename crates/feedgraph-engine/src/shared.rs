//! A registry shared across threads.
//!
//! Propagation reads and writes several accounts' logs inside one operation.
//! [`SharedRegistry`] serializes every operation through a single lock so no
//! observer ever sees a post or like half fanned out.

use std::sync::Arc;

use feedgraph_core::{AccountName, Activity, GraphError};
use parking_lot::Mutex;

use crate::account::Account;
use crate::registry::Registry;

/// Cloneable handle to one [`Registry`] behind a mutex.
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Handle to a fresh, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with shared access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` with exclusive access. Everything inside `f` is atomic with
    /// respect to other handles.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Insert an account. Returns the number of accounts afterwards.
    pub fn record(&self, account: Account) -> Result<usize, GraphError> {
        self.with_mut(|reg| reg.record(account).map(<[Account]>::len))
    }

    /// See [`Registry::follow`].
    pub fn follow(&self, follower: &str, target: &str) -> Result<(), GraphError> {
        self.with_mut(|reg| reg.follow(follower, target).map(|_| ()))
    }

    /// Post and return a copy of the poster's log.
    pub fn post(&self, poster: &str) -> Result<Vec<Activity>, GraphError> {
        self.with_mut(|reg| reg.post(poster).map(<[Activity]>::to_vec))
    }

    /// Like and return copies of the actor's and target's logs.
    pub fn like(&self, actor: &str, target: &str) -> Result<(Vec<Activity>, Vec<Activity>), GraphError> {
        self.with_mut(|reg| {
            reg.like(actor, target)
                .map(|out| (out.actor_log.to_vec(), out.target_log.to_vec()))
        })
    }

    /// Copy of an account's log, if the account exists.
    pub fn activities(&self, name: &str) -> Option<Vec<Activity>> {
        self.with(|reg| reg.find_by_name(name).map(|acc| acc.activities().to_vec()))
    }

    /// Leaderboard as `(name, like count)` pairs.
    pub fn leaderboard(&self) -> Vec<(AccountName, usize)> {
        self.with(|reg| {
            reg.leaderboard()
                .into_iter()
                .map(|acc| (acc.name().clone(), acc.photo().like_count()))
                .collect()
        })
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}
