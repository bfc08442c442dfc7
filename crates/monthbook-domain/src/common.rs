//! Shared identifier and amount primitives for ledger entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Millisecond-resolution creation timestamp used as a stable entity id.
///
/// Ids are unique and monotonically distinguishable within a session; the
/// recurring expander derives ids for projected copies with [`EntryId::offset`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Returns the id `steps` positions after this one.
    pub fn offset(self, steps: i64) -> Self {
        Self(self.0 + steps)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every item in the iterator.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
