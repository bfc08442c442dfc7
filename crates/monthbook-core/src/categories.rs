//! Canonical budget categories and source-label suggestions.

use monthbook_domain::TransactionKind;
use once_cell::sync::Lazy;

/// Fallback category when no keyword matches.
pub const OTHER_CATEGORY: &str = "Other";

/// Ordered keyword table checked front to back; the first matching keyword
/// wins, which keeps categorization deterministic when keywords overlap.
static CATEGORY_RULES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("rent", "Housing"),
        ("mortgage", "Housing"),
        ("utilities", "Utilities"),
        ("electricity", "Utilities"),
        ("water", "Utilities"),
        ("gas", "Utilities"),
        ("groceries", "Food"),
        ("dining", "Food"),
        ("restaurant", "Food"),
        ("transportation", "Transportation"),
        ("fuel", "Transportation"),
        ("car", "Transportation"),
        ("insurance", "Insurance"),
        ("healthcare", "Healthcare"),
        ("medical", "Healthcare"),
        ("entertainment", "Entertainment"),
        ("shopping", "Shopping"),
        ("education", "Education"),
        ("debt", "Debt"),
        ("loan", "Debt"),
        ("personal", "Personal"),
    ]
});

const INCOME_SOURCES: [&str; 8] = [
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Bonus",
    "Gift",
    "Refund",
    "Other Income",
];

const EXPENSE_SOURCES: [&str; 12] = [
    "Rent",
    "Groceries",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Insurance",
    "Debt Payment",
    "Shopping",
    "Dining Out",
    "Education",
    "Other Expense",
];

/// Maps a free-form source label to its canonical budget category by
/// case-insensitive substring lookup against the keyword table.
pub fn canonical_category(source: &str) -> &'static str {
    let lowered = source.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(OTHER_CATEGORY)
}

/// Commonly used source labels for the given transaction kind, suitable for
/// input suggestions.
pub fn suggested_sources(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => &INCOME_SOURCES,
        TransactionKind::Expense => &EXPENSE_SOURCES,
    }
}
