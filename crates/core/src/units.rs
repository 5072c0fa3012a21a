//! Height and LoanId - Integer newtypes with domain invariants
//!
//! `Height` values come from an external monotonic counter; the core only
//! reads and compares them. `LoanId` values are allocated by the loan
//! ledger, strictly increasing from 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-height timestamp.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Height(u64);

impl Height {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Height after `duration` more blocks. Saturates rather than wraps;
    /// real heights are nowhere near u64::MAX.
    #[inline]
    pub const fn offset(&self, duration: u64) -> Self {
        Self(self.0.saturating_add(duration))
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Height {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Opaque loan identifier, strictly increasing from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(u64);

impl LoanId {
    /// The first id the allocator hands out.
    pub const FIRST: Self = Self(1);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[inline]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for LoanId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_ordering_and_offset() {
        let start = Height::new(100);
        let due = start.offset(500);

        assert_eq!(due, Height::new(600));
        assert!(due > start);
        assert_eq!(Height::new(u64::MAX).offset(1), Height::new(u64::MAX));
    }

    #[test]
    fn test_loan_id_sequence() {
        let first = LoanId::FIRST;
        assert_eq!(first.value(), 1);
        assert_eq!(first.next(), LoanId::new(2));
        assert_eq!(first.to_string(), "#1");
    }

    #[test]
    fn test_serde_transparent() {
        let h: Height = serde_json::from_str("42").unwrap();
        assert_eq!(h, Height::new(42));
        assert_eq!(serde_json::to_string(&LoanId::new(7)).unwrap(), "7");
    }
}
