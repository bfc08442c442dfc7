//! Domain models for savings movements and savings goals.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Amounted, EntryId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsEntry {
    pub id: EntryId,
    pub kind: SavingsKind,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl SavingsEntry {
    /// Amount with the movement's sign applied: deposits count up,
    /// withdrawals count down.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            SavingsKind::Deposit => self.amount,
            SavingsKind::Withdrawal => -self.amount,
        }
    }
}

impl Amounted for SavingsEntry {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SavingsKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for SavingsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SavingsKind::Deposit => "Deposit",
            SavingsKind::Withdrawal => "Withdrawal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: EntryId,
    pub name: String,
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
