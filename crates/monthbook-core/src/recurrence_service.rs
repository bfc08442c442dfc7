//! Projects a base transaction across successive periods.

use std::fmt;

use chrono::Duration;
use monthbook_domain::{PeriodId, Store, Transaction};

use crate::time::shift_month;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cadence at which a recurring transaction repeats.
pub enum Frequency {
    Weekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

pub struct RecurrenceService;

impl RecurrenceService {
    /// Number of occurrences written per expansion.
    pub const DEFAULT_OCCURRENCES: usize = 12;

    /// Writes `count` dated copies of `base`, one per occurrence. Copy `i`
    /// keeps the amount and labels, takes id `base + i`, is flagged as
    /// recurring, and lands in the period record derived from its own date,
    /// creating that record if absent. Monthly advancement clamps the day
    /// to the last valid day of shorter target months; weekly advancement
    /// is an exact 7-day step.
    ///
    /// This is the only operation that writes across multiple periods in
    /// one call.
    pub fn expand(store: &mut Store, base: &Transaction, frequency: Frequency, count: usize) {
        for index in 0..count {
            let date = match frequency {
                Frequency::Monthly => shift_month(base.date, index as i32),
                Frequency::Weekly => base.date + Duration::days(7 * index as i64),
            };
            let copy = Transaction {
                id: base.id.offset(index as i64),
                date,
                recurring: true,
                ..base.clone()
            };
            store
                .get_or_create(PeriodId::from_date(date))
                .transactions
                .push(copy);
        }
    }
}
