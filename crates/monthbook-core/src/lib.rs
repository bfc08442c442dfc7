//! monthbook-core
//!
//! Ledger operations, recurring expansion, and the derived-metrics engine
//! for the period-keyed store. Depends on monthbook-domain. No terminal
//! I/O, no direct storage interactions.

pub mod budget_service;
pub mod categories;
pub mod error;
pub mod metrics_service;
pub mod recurrence_service;
pub mod report_service;
pub mod savings_service;
pub mod storage;
pub mod time;
pub mod transaction_service;

pub use budget_service::*;
pub use categories::{canonical_category, suggested_sources, OTHER_CATEGORY};
pub use error::{CoreError, ValidationError};
pub use metrics_service::*;
pub use recurrence_service::{Frequency, RecurrenceService};
pub use report_service::ReportService;
pub use savings_service::*;
pub use storage::SnapshotStorage;
pub use time::{shift_month, Clock, FixedClock, SystemClock};
pub use transaction_service::*;
