//! Create/delete/filter operations over a period's transactions.

use chrono::{DateTime, NaiveDate, Utc};
use monthbook_domain::{EntryId, PeriodId, PeriodRecord, Store, Transaction, TransactionKind};

use crate::{
    error::ValidationError,
    recurrence_service::{Frequency, RecurrenceService},
};

/// Input for a new transaction, as collected by the presentation layer.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub kind: TransactionKind,
    pub source: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub recurrence: Option<Frequency>,
}

/// Composable, read-only transaction filter. All present criteria must
/// match (logical AND); absent criteria are ignored.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring matched against source or description.
    pub search: Option<String>,
    /// Exact kind; `None` matches all kinds.
    pub kind: Option<TransactionKind>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.trim().is_empty()) {
            let needle = term.to_lowercase();
            let in_source = transaction.source.to_lowercase().contains(&needle);
            let in_description = transaction
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_source && !in_description {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if transaction.date > to {
                return false;
            }
        }
        true
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Validates and appends a transaction to the period's ledger. When a
    /// recurrence frequency is supplied, the recurring expander takes over
    /// and writes one dated copy per occurrence instead of a single append.
    pub fn add(
        store: &mut Store,
        period: PeriodId,
        input: TransactionInput,
        id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if input.amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        if input.source.trim().is_empty() {
            return Err(ValidationError::MissingSource);
        }
        let date = input.date.ok_or(ValidationError::MissingDate)?;

        let transaction = Transaction {
            id,
            kind: input.kind,
            source: input.source,
            amount: input.amount,
            date,
            description: normalize_note(input.description),
            recurring: false,
            created_at: now,
        };
        match input.recurrence {
            Some(frequency) => RecurrenceService::expand(
                store,
                &transaction,
                frequency,
                RecurrenceService::DEFAULT_OCCURRENCES,
            ),
            None => store.get_or_create(period).transactions.push(transaction),
        }
        Ok(())
    }

    /// Quick entry: dated today, fixed description, never recurring.
    pub fn add_quick(
        store: &mut Store,
        period: PeriodId,
        kind: TransactionKind,
        source: impl Into<String>,
        amount: f64,
        id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let input = TransactionInput {
            kind,
            source: source.into(),
            amount,
            date: Some(now.date_naive()),
            description: Some("Quick entry".into()),
            recurrence: None,
        };
        Self::add(store, period, input, id, now)
    }

    /// Filter-out delete: removing an unknown id leaves the record
    /// unchanged, so the operation is idempotent.
    pub fn remove(store: &mut Store, period: PeriodId, id: EntryId) {
        if let Some(record) = store.get_mut(period) {
            record.transactions.retain(|t| t.id != id);
        }
    }

    /// Read-only view of the period's transactions matching `filter`, in
    /// insertion order.
    pub fn filter<'a>(
        record: &'a PeriodRecord,
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        record
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }
}

pub(crate) fn normalize_note(note: Option<String>) -> Option<String> {
    note.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(source: &str, amount: f64, day: u32) -> TransactionInput {
        TransactionInput {
            kind: TransactionKind::Expense,
            source: source.into(),
            amount,
            date: Some(date(2024, 3, day)),
            description: None,
            recurrence: None,
        }
    }

    #[test]
    fn added_transaction_appears_exactly_once_in_unfiltered_view() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        TransactionService::add(&mut store, period, expense("Groceries", 45.0, 5), EntryId::new(1), now())
            .expect("valid input");

        let record = store.get(period).expect("record created");
        let all = TransactionService::filter(record, &TransactionFilter::default());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].source, "Groceries");
        assert!(!all[0].recurring);
    }

    #[test]
    fn rejects_non_positive_amounts_without_mutating() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        let err = TransactionService::add(
            &mut store,
            period,
            expense("Groceries", 0.0, 5),
            EntryId::new(1),
            now(),
        )
        .expect_err("zero amount");
        assert_eq!(err, ValidationError::InvalidAmount);
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_blank_source_and_missing_date() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        let blank = TransactionInput {
            source: "   ".into(),
            ..expense("x", 10.0, 5)
        };
        assert_eq!(
            TransactionService::add(&mut store, period, blank, EntryId::new(1), now()),
            Err(ValidationError::MissingSource)
        );

        let undated = TransactionInput {
            date: None,
            ..expense("Groceries", 10.0, 5)
        };
        assert_eq!(
            TransactionService::add(&mut store, period, undated, EntryId::new(2), now()),
            Err(ValidationError::MissingDate)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        TransactionService::add(&mut store, period, expense("Fuel", 60.0, 7), EntryId::new(9), now())
            .unwrap();

        TransactionService::remove(&mut store, period, EntryId::new(9));
        assert!(store.get(period).unwrap().transactions.is_empty());

        // Deleting again, or deleting an id that never existed, changes nothing.
        TransactionService::remove(&mut store, period, EntryId::new(9));
        TransactionService::remove(&mut store, period, EntryId::new(1234));
        assert!(store.get(period).unwrap().transactions.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_does_not_create_missing_periods() {
        let mut store = Store::new();
        TransactionService::remove(&mut store, PeriodId::new(2024, 3), EntryId::new(1));
        assert!(store.is_empty());
    }

    #[test]
    fn kind_filter_preserves_order_and_excludes_other_kinds() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        let inputs = [
            ("Salary", TransactionKind::Income),
            ("Rent", TransactionKind::Expense),
            ("Bonus", TransactionKind::Income),
            ("Groceries", TransactionKind::Expense),
            ("Fuel", TransactionKind::Expense),
        ];
        for (index, (source, kind)) in inputs.iter().enumerate() {
            let input = TransactionInput {
                kind: *kind,
                ..expense(source, 100.0, 5)
            };
            TransactionService::add(&mut store, period, input, EntryId::new(index as i64), now())
                .unwrap();
        }

        let record = store.get(period).unwrap();
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            ..TransactionFilter::default()
        };
        let expenses = TransactionService::filter(record, &filter);
        let sources: Vec<_> = expenses.iter().map(|t| t.source.as_str()).collect();
        assert_eq!(sources, vec!["Rent", "Groceries", "Fuel"]);
    }

    #[test]
    fn search_matches_source_or_description_case_insensitively() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        let described = TransactionInput {
            description: Some("weekly shop at the market".into()),
            ..expense("Groceries", 45.0, 5)
        };
        TransactionService::add(&mut store, period, described, EntryId::new(1), now()).unwrap();
        TransactionService::add(&mut store, period, expense("Fuel", 60.0, 7), EntryId::new(2), now())
            .unwrap();

        let record = store.get(period).unwrap();
        let by_source = TransactionFilter {
            search: Some("GROC".into()),
            ..TransactionFilter::default()
        };
        assert_eq!(TransactionService::filter(record, &by_source).len(), 1);

        let by_description = TransactionFilter {
            search: Some("Market".into()),
            ..TransactionFilter::default()
        };
        assert_eq!(TransactionService::filter(record, &by_description).len(), 1);

        let blank_search = TransactionFilter {
            search: Some("  ".into()),
            ..TransactionFilter::default()
        };
        assert_eq!(TransactionService::filter(record, &blank_search).len(), 2);
    }

    #[test]
    fn date_bounds_are_inclusive_and_compose_with_kind() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        for (id, day) in [(1, 3), (2, 10), (3, 20)] {
            TransactionService::add(
                &mut store,
                period,
                expense("Groceries", 10.0, day),
                EntryId::new(id),
                now(),
            )
            .unwrap();
        }

        let record = store.get(period).unwrap();
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            date_from: Some(date(2024, 3, 10)),
            date_to: Some(date(2024, 3, 20)),
            ..TransactionFilter::default()
        };
        let matched = TransactionService::filter(record, &filter);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].date, date(2024, 3, 10));
        assert_eq!(matched[1].date, date(2024, 3, 20));
    }

    #[test]
    fn recurrence_delegates_to_the_expander() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 1);
        let input = TransactionInput {
            date: Some(date(2024, 1, 5)),
            recurrence: Some(Frequency::Monthly),
            ..expense("Rent", 1200.0, 5)
        };
        TransactionService::add(&mut store, period, input, EntryId::new(100), now()).unwrap();

        assert_eq!(store.len(), 12);
        let total: usize = store.periods().map(|(_, r)| r.transactions.len()).sum();
        assert_eq!(total, 12);
        assert!(store
            .periods()
            .all(|(_, r)| r.transactions.iter().all(|t| t.recurring)));
    }

    #[test]
    fn quick_entry_uses_today_and_a_fixed_description() {
        let mut store = Store::new();
        let period = PeriodId::new(2024, 3);
        TransactionService::add_quick(
            &mut store,
            period,
            TransactionKind::Income,
            "Freelance",
            250.0,
            EntryId::new(7),
            now(),
        )
        .unwrap();

        let txn = &store.get(period).unwrap().transactions[0];
        assert_eq!(txn.date, date(2024, 3, 10));
        assert_eq!(txn.description.as_deref(), Some("Quick entry"));
    }
}
