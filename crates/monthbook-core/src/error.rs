use thiserror::Error;

/// Rejected user input. Recoverable; the store is never mutated when one of
/// these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than 0")]
    InvalidAmount,
    #[error("Source/Category is required")]
    MissingSource,
    #[error("Date is required")]
    MissingDate,
    #[error("Goal name and target amount are required")]
    MissingGoalFields,
    #[error("Budget category and amount are required")]
    MissingBudgetFields,
}

/// Unified error type for core and storage layers. Nothing here is fatal:
/// validation is surfaced to the caller, a bad import leaves prior state
/// untouched, and storage failures degrade to memory-only operation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Snapshot format not recognized: {0}")]
    InvalidSnapshot(String),
    #[error("Persistence error: {0}")]
    Storage(String),
}
