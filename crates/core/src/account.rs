//! AccountId - Opaque caller identity
//!
//! Identity verification happens outside the core; by the time an
//! `AccountId` reaches us it is authenticated. The core only ever
//! compares identities for equality (e.g. against the operator).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account identifier.
///
/// Comparable for equality and usable as a map key; the core attaches
/// no other meaning to it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_and_display() {
        let alice = AccountId::new("ALICE");
        let alice2 = AccountId::from("ALICE");
        let bob = AccountId::new("BOB");

        assert_eq!(alice, alice2);
        assert_ne!(alice, bob);
        assert_eq!(alice.to_string(), "ALICE");
    }

    #[test]
    fn test_serde_transparent() {
        let id = AccountId::new("ALICE");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ALICE\"");

        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
