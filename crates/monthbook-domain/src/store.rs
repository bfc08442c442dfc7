//! Period-keyed store owning every ledger record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{period::PeriodId, record::PeriodRecord};

/// Mapping from period identifier to period record. The whole store is the
/// unit of persistence: it is loaded and saved atomically as one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Store {
    periods: BTreeMap<PeriodId, PeriodRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, period: PeriodId) -> Option<&PeriodRecord> {
        self.periods.get(&period)
    }

    /// Returns the record for `period`, creating a default-initialized one
    /// on first access.
    pub fn get_or_create(&mut self, period: PeriodId) -> &mut PeriodRecord {
        self.periods.entry(period).or_default()
    }

    /// Mutable access without the lazy-create side effect.
    pub fn get_mut(&mut self, period: PeriodId) -> Option<&mut PeriodRecord> {
        self.periods.get_mut(&period)
    }

    /// Removes the record entirely; no-op when the period was never touched.
    pub fn remove(&mut self, period: PeriodId) -> Option<PeriodRecord> {
        self.periods.remove(&period)
    }

    pub fn contains(&self, period: PeriodId) -> bool {
        self.periods.contains_key(&period)
    }

    pub fn periods(&self) -> impl Iterator<Item = (PeriodId, &PeriodRecord)> {
        self.periods.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Full-store copy used by persistence and export.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Full-store replace used by persistence and import.
    pub fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}
