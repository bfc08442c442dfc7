//! The per-period record bundling every ledger sequence for one month.

use serde::{Deserialize, Serialize};

use crate::{
    budget::{BudgetItem, BudgetSettings},
    savings::{SavingsEntry, SavingsGoal},
    transaction::Transaction,
};

/// Everything recorded for a single (year, month) bucket. Sequences keep
/// insertion order, which is not necessarily chronological.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodRecord {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub savings: Vec<SavingsEntry>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default)]
    pub budget: BudgetSettings,
}

impl PeriodRecord {
    /// True when at least one transaction has been recorded. Periods without
    /// transactions are skipped by the all-time statistics.
    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }
}
