//! Account name newtype.
//!
//! Accounts are identified by their name and nothing else: two accounts are
//! the same account iff their names are equal (case-sensitive). Wrapping the
//! string keeps names from being confused with free-form command text.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, case-sensitive account identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountName(String);

impl AccountName {
    /// Create a name from any string value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for AccountName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccountName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for AccountName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AccountName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(AccountName::new("Alice"), AccountName::from("Alice"));
        assert_ne!(AccountName::new("Alice"), AccountName::new("alice"));
    }

    #[test]
    fn compares_against_plain_strings() {
        let name = AccountName::new("Bob");
        assert!(name == "Bob");
        assert!(name != "bob");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut index = HashMap::new();
        let _ = index.insert(AccountName::new("Carol"), 7_usize);
        assert_eq!(index.get("Carol"), Some(&7));
        assert_eq!(index.get("carol"), None);
    }

    #[test]
    fn display_is_the_raw_name() {
        assert_eq!(AccountName::new("Dave").to_string(), "Dave");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&AccountName::new("Eve")).unwrap();
        assert_eq!(json, "\"Eve\"");
    }
}
