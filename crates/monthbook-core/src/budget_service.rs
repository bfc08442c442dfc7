//! Operations over a period's budget items and planning settings.

use chrono::{DateTime, Utc};
use monthbook_domain::{
    BudgetItem, BudgetPriority, BudgetSettings, EntryId, PeriodId, PeriodRecord, Store,
};

use crate::{error::ValidationError, metrics_service::MetricsService};

#[derive(Debug, Clone)]
pub struct BudgetItemInput {
    pub category: String,
    pub amount: f64,
    pub priority: BudgetPriority,
}

/// Raw numeric settings as read from the caller's form. Absent values are
/// coerced to 0, except the savings target which falls back to its default.
#[derive(Debug, Clone, Default)]
pub struct BudgetSettingsInput {
    pub income_goal: Option<f64>,
    pub expense_limit: Option<f64>,
    pub savings_target: Option<f64>,
    pub emergency_fund: Option<f64>,
}

/// Progress against the period's planning targets, each capped at 100%.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub income_percent: f64,
    pub expense_percent: f64,
    pub savings_percent: f64,
}

pub struct BudgetService;

impl BudgetService {
    pub fn add_item(
        store: &mut Store,
        period: PeriodId,
        input: BudgetItemInput,
        id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if input.category.trim().is_empty() || input.amount <= 0.0 {
            return Err(ValidationError::MissingBudgetFields);
        }
        let item = BudgetItem {
            id,
            category: input.category,
            amount: input.amount,
            priority: input.priority,
            created_at: now,
        };
        store.get_or_create(period).budget_items.push(item);
        Ok(())
    }

    pub fn remove_item(store: &mut Store, period: PeriodId, id: EntryId) {
        if let Some(record) = store.get_mut(period) {
            record.budget_items.retain(|item| item.id != id);
        }
    }

    /// Overwrites the period's settings wholesale.
    pub fn save_settings(store: &mut Store, period: PeriodId, input: BudgetSettingsInput) {
        store.get_or_create(period).budget = BudgetSettings {
            income_goal: input.income_goal.unwrap_or(0.0),
            expense_limit: input.expense_limit.unwrap_or(0.0),
            savings_target: input
                .savings_target
                .unwrap_or_else(BudgetSettings::default_savings_target),
            emergency_fund: input.emergency_fund.unwrap_or(0.0),
        };
    }

    pub fn progress(record: &PeriodRecord) -> BudgetProgress {
        let income = MetricsService::income_total(record);
        let expenses = MetricsService::expense_total(record);
        let settings = &record.budget;

        let income_percent = capped_share(income, settings.income_goal);
        let expense_percent = capped_share(expenses, settings.expense_limit);
        let target_savings = income * settings.savings_target / 100.0;
        let savings_percent = capped_share(income - expenses, target_savings);

        BudgetProgress {
            income_percent,
            expense_percent,
            savings_percent,
        }
    }
}

fn capped_share(value: f64, target: f64) -> f64 {
    if target > 0.0 {
        (value / target * 100.0).min(100.0)
    } else {
        0.0
    }
}
