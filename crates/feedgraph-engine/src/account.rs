//! Accounts and their photo.
//!
//! An [`Account`] is plain data. Operations that touch more than one account
//! (follow, post, like) live on [`Registry`](crate::Registry), which owns every
//! account and can borrow several of them at once.

use feedgraph_core::{AccountName, Activity};

/// The single photo an account may post, and who liked it.
#[derive(Clone, Debug, Default)]
pub struct Photo {
    exists: bool,
    liked_by: Vec<AccountName>,
}

impl Photo {
    /// Whether the photo has been uploaded.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Names of the accounts that liked the photo, in like order.
    pub fn liked_by(&self) -> &[AccountName] {
        &self.liked_by
    }

    /// Number of likes, as used by the leaderboard.
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    pub(crate) fn mark_uploaded(&mut self) {
        self.exists = true;
    }

    pub(crate) fn record_like(&mut self, liker: AccountName) {
        self.liked_by.push(liker);
    }
}

/// One member of the social graph.
///
/// Equality is by name only: two `Account` values describe the same account
/// whenever their names match, whatever their other state.
#[derive(Clone, Debug)]
pub struct Account {
    name: AccountName,
    photo: Photo,
    following: Vec<AccountName>,
    followers: Vec<AccountName>,
    activities: Vec<Activity>,
}

impl Account {
    /// A fresh account: no photo, no edges, empty log.
    pub fn new(name: impl Into<AccountName>) -> Self {
        Self {
            name: name.into(),
            photo: Photo::default(),
            following: Vec::new(),
            followers: Vec::new(),
            activities: Vec::new(),
        }
    }

    pub fn name(&self) -> &AccountName {
        &self.name
    }

    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    /// Accounts this account follows, in follow order.
    pub fn following(&self) -> &[AccountName] {
        &self.following
    }

    /// Accounts following this account, in follow order.
    pub fn followers(&self) -> &[AccountName] {
        &self.followers
    }

    /// The activity log, oldest first.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn is_same_account(&self, other: &Account) -> bool {
        self.name == other.name
    }

    /// Whether this account appears in `other`'s follower list.
    pub fn has_followed(&self, other: &Account) -> bool {
        other.followers.contains(&self.name)
    }

    pub fn has_posted(&self) -> bool {
        self.photo.exists()
    }

    /// Whether an identical activity is anywhere in this account's log.
    pub fn has_logged(&self, activity: &Activity) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Strictly more likes than `other`.
    pub fn has_more_likes(&self, other: &Account) -> bool {
        self.photo.like_count() > other.photo.like_count()
    }

    pub(crate) fn last_activity(&self) -> Option<&Activity> {
        self.activities.last()
    }

    pub(crate) fn append(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    pub(crate) fn photo_mut(&mut self) -> &mut Photo {
        &mut self.photo
    }

    pub(crate) fn add_following(&mut self, name: AccountName) {
        self.following.push(name);
    }

    pub(crate) fn add_follower(&mut self, name: AccountName) {
        self.followers.push(name);
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_account(other)
    }
}

impl Eq for Account {}
