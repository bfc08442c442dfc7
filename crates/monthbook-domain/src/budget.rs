//! Domain models for per-period budget items and settings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Amounted, EntryId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub id: EntryId,
    /// Canonical category label the item budgets for, e.g. "Housing".
    pub category: String,
    pub amount: f64,
    pub priority: BudgetPriority,
    pub created_at: DateTime<Utc>,
}

impl Amounted for BudgetItem {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetPriority {
    Essential,
    Important,
    Discretionary,
}

impl fmt::Display for BudgetPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPriority::Essential => "Essential",
            BudgetPriority::Important => "Important",
            BudgetPriority::Discretionary => "Discretionary",
        };
        f.write_str(label)
    }
}

/// Per-period planning targets. `savings_target` is a percentage of income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSettings {
    #[serde(default)]
    pub income_goal: f64,
    #[serde(default)]
    pub expense_limit: f64,
    #[serde(default = "BudgetSettings::default_savings_target")]
    pub savings_target: f64,
    #[serde(default)]
    pub emergency_fund: f64,
}

impl BudgetSettings {
    pub fn default_savings_target() -> f64 {
        20.0
    }
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            income_goal: 0.0,
            expense_limit: 0.0,
            savings_target: Self::default_savings_target(),
            emergency_fund: 0.0,
        }
    }
}
