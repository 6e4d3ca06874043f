//! The account arena.
//!
//! The registry owns every account in insertion order, plus a name index for
//! lookups. Accounts are never removed, so an index handed out once stays
//! valid for the registry's lifetime.

use std::collections::HashMap;

use feedgraph_core::{AccountName, GraphError};
use tracing::debug;

use crate::account::Account;

/// Uniqueness-checked collection of accounts.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    pub(crate) accounts: Vec<Account>,
    index: HashMap<AccountName, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `account`, failing with [`GraphError::UserExist`] if its name is
    /// already taken. Returns every account recorded so far.
    pub fn record(&mut self, account: Account) -> Result<&[Account], GraphError> {
        if self.is_account_exist(account.name()).is_some() {
            debug!(name = %account.name(), "registry insert rejected");
            return Err(GraphError::UserExist);
        }
        let _ = self.index.insert(account.name().clone(), self.accounts.len());
        debug!(name = %account.name(), total = self.accounts.len() + 1, "account recorded");
        self.accounts.push(account);
        Ok(&self.accounts)
    }

    /// Record a fresh account named `name` unless one exists. Returns `true`
    /// if the account was created.
    pub fn record_if_absent(&mut self, name: &str) -> bool {
        if self.is_account_exist(name).is_some() {
            return false;
        }
        self.record(Account::new(name)).is_ok()
    }

    /// Position of the account named `name`, if present.
    pub fn is_account_exist(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        self.is_account_exist(name).map(|idx| &self.accounts[idx])
    }

    /// All accounts, in the order they were recorded.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts ordered by descending like count.
    ///
    /// The sort is unstable: accounts with equal like counts come out in no
    /// particular order. The registry's own order is left untouched.
    pub fn leaderboard(&self) -> Vec<&Account> {
        let mut board: Vec<&Account> = self.accounts.iter().collect();
        board.sort_unstable_by(|a, b| b.photo().like_count().cmp(&a.photo().like_count()));
        board
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<usize, GraphError> {
        self.is_account_exist(name)
            .ok_or_else(|| GraphError::UnknownUser(AccountName::new(name)))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn record_returns_all_accounts() {
        let mut reg = Registry::new();
        let all = reg.record(Account::new("aditbuddy")).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), "aditbuddy");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut reg = Registry::new();
        let _ = reg.record(Account::new("aditbuddy")).unwrap();
        assert_matches!(
            reg.record(Account::new("aditbuddy")),
            Err(GraphError::UserExist)
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut reg = Registry::new();
        let _ = reg.record(Account::new("alice")).unwrap();
        assert!(reg.record(Account::new("Alice")).is_ok());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn lookup_miss() {
        let mut reg = Registry::new();
        let _ = reg.record(Account::new("aditbuddy")).unwrap();
        assert_eq!(reg.is_account_exist("test"), None);
        assert!(reg.find_by_name("test").is_none());
        assert_matches!(reg.resolve("test"), Err(GraphError::UnknownUser(n)) if n == "test");
    }

    #[test]
    fn lookup_hit_returns_position() {
        let mut reg = Registry::new();
        let _ = reg.record(Account::new("a")).unwrap();
        let _ = reg.record(Account::new("b")).unwrap();
        assert_eq!(reg.is_account_exist("b"), Some(1));
        assert_eq!(reg.find_by_name("a").map(Account::name), Some(&AccountName::new("a")));
    }

    #[test]
    fn record_if_absent_is_idempotent() {
        let mut reg = Registry::new();
        assert!(reg.record_if_absent("Alice"));
        assert!(!reg.record_if_absent("Alice"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn leaderboard_on_empty_registry() {
        let reg = Registry::new();
        assert!(reg.leaderboard().is_empty());
        assert!(reg.is_empty());
    }

    #[test]
    fn leaderboard_does_not_reorder_the_registry() {
        let mut reg = Registry::new();
        let _ = reg.record(Account::new("first")).unwrap();
        let _ = reg.record(Account::new("second")).unwrap();
        reg.accounts[1].photo_mut().record_like("first".into());

        let board = reg.leaderboard();
        assert_eq!(board[0].name(), "second");
        assert_eq!(reg.accounts()[0].name(), "first");
    }
}
