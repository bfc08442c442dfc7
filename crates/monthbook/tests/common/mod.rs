#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use monthbook::{
    CoreError, FixedClock, JsonStorage, SnapshotStorage, Store, Tracker, TransactionInput,
    TransactionKind,
};
use tempfile::TempDir;

/// Instant every fixed-clock test runs at: 2024-06-15 12:00 UTC.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tracker over JSON storage rooted in `dir`, driven by the fixed clock.
pub fn tracker_in(dir: &TempDir) -> Tracker {
    let storage = JsonStorage::with_base_dir(dir.path().to_path_buf()).expect("json storage");
    Tracker::new(Box::new(storage), Box::new(FixedClock(fixed_instant())))
}

pub fn expense_input(source: &str, amount: f64, on: NaiveDate) -> TransactionInput {
    TransactionInput {
        kind: TransactionKind::Expense,
        source: source.into(),
        amount,
        date: Some(on),
        description: None,
        recurrence: None,
    }
}

pub fn income_input(source: &str, amount: f64, on: NaiveDate) -> TransactionInput {
    TransactionInput {
        kind: TransactionKind::Income,
        ..expense_input(source, amount, on)
    }
}

/// Storage stub that counts saves and keeps the last snapshot in memory.
#[derive(Clone, Default)]
pub struct CountingStorage {
    saves: Arc<AtomicUsize>,
    last: Arc<Mutex<Store>>,
}

impl CountingStorage {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn last_snapshot(&self) -> Store {
        self.last.lock().unwrap().clone()
    }
}

impl SnapshotStorage for CountingStorage {
    fn load(&self) -> Result<Store, CoreError> {
        Ok(self.last.lock().unwrap().clone())
    }

    fn save(&self, store: &Store) -> Result<(), CoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = store.clone();
        Ok(())
    }
}

/// Storage stub whose saves always fail; loads report an empty backend.
pub struct FailingStorage;

impl SnapshotStorage for FailingStorage {
    fn load(&self) -> Result<Store, CoreError> {
        Ok(Store::new())
    }

    fn save(&self, _store: &Store) -> Result<(), CoreError> {
        Err(CoreError::Storage("disk unavailable".into()))
    }
}

/// Storage stub whose load fails outright.
pub struct UnreadableStorage;

impl SnapshotStorage for UnreadableStorage {
    fn load(&self) -> Result<Store, CoreError> {
        Err(CoreError::Storage("backend offline".into()))
    }

    fn save(&self, _store: &Store) -> Result<(), CoreError> {
        Ok(())
    }
}
