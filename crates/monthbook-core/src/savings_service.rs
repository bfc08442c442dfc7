//! Operations over a period's savings movements and goals.

use chrono::{DateTime, NaiveDate, Utc};
use monthbook_domain::{EntryId, PeriodId, SavingsEntry, SavingsGoal, SavingsKind, Store};

use crate::{error::ValidationError, transaction_service::normalize_note};

/// Input for a new savings movement. A missing date defaults to today.
#[derive(Debug, Clone)]
pub struct SavingsEntryInput {
    pub kind: SavingsKind,
    pub amount: f64,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct SavingsGoalInput {
    pub name: String,
    pub target: f64,
    pub target_date: Option<NaiveDate>,
}

pub struct SavingsService;

impl SavingsService {
    pub fn add_entry(
        store: &mut Store,
        period: PeriodId,
        input: SavingsEntryInput,
        id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if input.amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        let entry = SavingsEntry {
            id,
            kind: input.kind,
            amount: input.amount,
            description: normalize_note(input.description),
            date: input.date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
        };
        store.get_or_create(period).savings.push(entry);
        Ok(())
    }

    pub fn remove_entry(store: &mut Store, period: PeriodId, id: EntryId) {
        if let Some(record) = store.get_mut(period) {
            record.savings.retain(|entry| entry.id != id);
        }
    }

    pub fn add_goal(
        store: &mut Store,
        period: PeriodId,
        input: SavingsGoalInput,
        id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if input.name.trim().is_empty() || input.target <= 0.0 {
            return Err(ValidationError::MissingGoalFields);
        }
        let goal = SavingsGoal {
            id,
            name: input.name,
            target: input.target,
            target_date: input.target_date,
            created_at: now,
        };
        store.get_or_create(period).savings_goals.push(goal);
        Ok(())
    }

    pub fn remove_goal(store: &mut Store, period: PeriodId, id: EntryId) {
        if let Some(record) = store.get_mut(period) {
            record.savings_goals.retain(|goal| goal.id != id);
        }
    }

    /// Progress towards a goal as a percentage of its target, capped at 100.
    pub fn goal_progress(balance: f64, goal: &SavingsGoal) -> f64 {
        if goal.target <= 0.0 {
            return 0.0;
        }
        (balance / goal.target * 100.0).min(100.0)
    }
}
