//! Session facade over the store, storage backend, and clock.
//!
//! Every ledger operation takes an explicit [`PeriodId`]; the tracker keeps
//! no ambient "current period" selection. Mutating operations end with a
//! blocking write-through save. A failed save is warned about once per
//! session and the tracker continues memory-only; nothing here is fatal.

use monthbook_core::{
    AllTimeStats, BudgetAnalysis, BudgetItemInput, BudgetProgress, BudgetService,
    BudgetSettingsInput, Clock, CoreError, DashboardMetrics, HealthScore, MetricsService,
    RecurrenceService, ReportService, SavingsEntryInput, SavingsGoalInput, SavingsService,
    SavingsTotals, SnapshotStorage, SystemClock, TransactionFilter, TransactionInput,
    TransactionService, ValidationError,
};
use monthbook_domain::{EntryId, PeriodId, PeriodRecord, Store, Transaction, TransactionKind};

pub struct Tracker {
    store: Store,
    storage: Box<dyn SnapshotStorage>,
    clock: Box<dyn Clock>,
    id_watermark: i64,
    storage_warned: bool,
}

impl Tracker {
    /// Loads the prior snapshot from `storage`, or starts empty when none
    /// can be read.
    pub fn new(storage: Box<dyn SnapshotStorage>, clock: Box<dyn Clock>) -> Self {
        let store = match storage.load() {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("could not load prior data, starting empty: {err}");
                Store::new()
            }
        };
        tracing::info!(periods = store.len(), "ledger loaded");
        Self {
            store,
            storage,
            clock,
            id_watermark: 0,
            storage_warned: false,
        }
    }

    pub fn with_system_clock(storage: Box<dyn SnapshotStorage>) -> Self {
        Self::new(storage, Box::new(SystemClock))
    }

    /// The period bucket containing today's date.
    pub fn current_period(&self) -> PeriodId {
        PeriodId::from_date(self.clock.today())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn period(&self, period: PeriodId) -> Option<&PeriodRecord> {
        self.store.get(period)
    }

    /// True once a save has failed this session. The presentation layer
    /// uses this to warn that data will not outlive the session.
    pub fn storage_degraded(&self) -> bool {
        self.storage_warned
    }

    // ---- ledger operations ------------------------------------------------

    pub fn add_transaction(
        &mut self,
        period: PeriodId,
        input: TransactionInput,
    ) -> Result<EntryId, ValidationError> {
        let occurrences = if input.recurrence.is_some() {
            RecurrenceService::DEFAULT_OCCURRENCES as i64
        } else {
            1
        };
        let id = self.reserve_ids(occurrences);
        TransactionService::add(&mut self.store, period, input, id, self.clock.now())?;
        self.persist();
        Ok(id)
    }

    pub fn add_quick_transaction(
        &mut self,
        period: PeriodId,
        kind: TransactionKind,
        source: &str,
        amount: f64,
    ) -> Result<EntryId, ValidationError> {
        let id = self.reserve_ids(1);
        TransactionService::add_quick(
            &mut self.store,
            period,
            kind,
            source,
            amount,
            id,
            self.clock.now(),
        )?;
        self.persist();
        Ok(id)
    }

    pub fn delete_transaction(&mut self, period: PeriodId, id: EntryId) {
        TransactionService::remove(&mut self.store, period, id);
        self.persist();
    }

    pub fn filter_transactions(
        &self,
        period: PeriodId,
        filter: &TransactionFilter,
    ) -> Vec<&Transaction> {
        self.store
            .get(period)
            .map(|record| TransactionService::filter(record, filter))
            .unwrap_or_default()
    }

    pub fn add_savings_entry(
        &mut self,
        period: PeriodId,
        input: SavingsEntryInput,
    ) -> Result<EntryId, ValidationError> {
        let id = self.reserve_ids(1);
        SavingsService::add_entry(&mut self.store, period, input, id, self.clock.now())?;
        self.persist();
        Ok(id)
    }

    pub fn delete_savings_entry(&mut self, period: PeriodId, id: EntryId) {
        SavingsService::remove_entry(&mut self.store, period, id);
        self.persist();
    }

    pub fn add_savings_goal(
        &mut self,
        period: PeriodId,
        input: SavingsGoalInput,
    ) -> Result<EntryId, ValidationError> {
        let id = self.reserve_ids(1);
        SavingsService::add_goal(&mut self.store, period, input, id, self.clock.now())?;
        self.persist();
        Ok(id)
    }

    pub fn delete_savings_goal(&mut self, period: PeriodId, id: EntryId) {
        SavingsService::remove_goal(&mut self.store, period, id);
        self.persist();
    }

    pub fn add_budget_item(
        &mut self,
        period: PeriodId,
        input: BudgetItemInput,
    ) -> Result<EntryId, ValidationError> {
        let id = self.reserve_ids(1);
        BudgetService::add_item(&mut self.store, period, input, id, self.clock.now())?;
        self.persist();
        Ok(id)
    }

    pub fn delete_budget_item(&mut self, period: PeriodId, id: EntryId) {
        BudgetService::remove_item(&mut self.store, period, id);
        self.persist();
    }

    pub fn save_budget_settings(&mut self, period: PeriodId, input: BudgetSettingsInput) {
        BudgetService::save_settings(&mut self.store, period, input);
        self.persist();
    }

    /// Removes the period record entirely. Unconditional: confirmation is
    /// the caller's responsibility.
    pub fn clear_period(&mut self, period: PeriodId) {
        self.store.remove(period);
        self.persist();
    }

    // ---- derived metrics --------------------------------------------------

    pub fn health_score(&self, period: PeriodId) -> HealthScore {
        self.with_record(period, MetricsService::health_score)
    }

    pub fn dashboard(&self, period: PeriodId) -> DashboardMetrics {
        let today = self.clock.today();
        self.with_record(period, |record| {
            MetricsService::dashboard(record, period, today)
        })
    }

    pub fn budget_analysis(&self, period: PeriodId) -> BudgetAnalysis {
        self.with_record(period, MetricsService::budget_analysis)
    }

    pub fn budget_progress(&self, period: PeriodId) -> BudgetProgress {
        self.with_record(period, BudgetService::progress)
    }

    pub fn savings_totals(&self, period: PeriodId) -> SavingsTotals {
        self.with_record(period, MetricsService::savings_totals)
    }

    pub fn all_time_stats(&self) -> AllTimeStats {
        MetricsService::all_time(&self.store)
    }

    pub fn period_report(&self, period: PeriodId) -> String {
        let today = self.clock.today();
        self.with_record(period, |record| {
            ReportService::period_report(record, period, today)
        })
    }

    // ---- import / export --------------------------------------------------

    /// Serializes the whole store as a pretty-printed JSON document.
    pub fn export_snapshot(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.store).map_err(|err| CoreError::Storage(err.to_string()))
    }

    /// Replaces the whole store with a parsed snapshot and persists. A
    /// snapshot that fails to parse leaves the existing state untouched.
    pub fn import_snapshot(&mut self, data: &str) -> Result<(), CoreError> {
        let snapshot: Store =
            serde_json::from_str(data).map_err(|err| CoreError::InvalidSnapshot(err.to_string()))?;
        self.store.restore(snapshot);
        self.persist();
        Ok(())
    }

    // ---- internals --------------------------------------------------------

    fn with_record<T>(&self, period: PeriodId, f: impl FnOnce(&PeriodRecord) -> T) -> T {
        match self.store.get(period) {
            Some(record) => f(record),
            None => f(&PeriodRecord::default()),
        }
    }

    /// Hands out `count` consecutive ids starting at the current clock
    /// millisecond, bumping past the watermark so ids stay unique even when
    /// the clock does not advance between calls.
    fn reserve_ids(&mut self, count: i64) -> EntryId {
        let now_ms = self.clock.now().timestamp_millis();
        let base = now_ms.max(self.id_watermark + 1);
        self.id_watermark = base + count - 1;
        EntryId::new(base)
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.store) {
            if !self.storage_warned {
                tracing::warn!("could not persist ledger, continuing in memory: {err}");
                self.storage_warned = true;
            }
        }
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        // Session-teardown flush, mirroring the per-operation saves.
        if let Err(err) = self.storage.save(&self.store) {
            tracing::warn!("could not persist ledger on shutdown: {err}");
        }
    }
}
