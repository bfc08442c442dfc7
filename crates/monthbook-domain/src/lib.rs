//! monthbook-domain
//!
//! Data model for the period-keyed personal finance ledger: period
//! identifiers, period records, transactions, savings movements and goals,
//! budget items, and the store that owns them all. No I/O, no business
//! rules beyond structural helpers.

pub mod budget;
pub mod common;
pub mod period;
pub mod record;
pub mod savings;
pub mod store;
pub mod transaction;

pub use budget::{BudgetItem, BudgetPriority, BudgetSettings};
pub use common::{sum_amounts, Amounted, EntryId};
pub use period::{PeriodId, PeriodIdParseError};
pub use record::PeriodRecord;
pub use savings::{SavingsEntry, SavingsGoal, SavingsKind};
pub use store::Store;
pub use transaction::{Transaction, TransactionKind};
