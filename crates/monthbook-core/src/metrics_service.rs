//! Pure aggregation and scoring over period records and the whole store.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use monthbook_domain::{
    sum_amounts, BudgetPriority, PeriodId, PeriodRecord, SavingsKind, Store, TransactionKind,
};

use crate::categories::canonical_category;

/// Deposit/withdrawal sums and the resulting balance for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsTotals {
    pub deposits: f64,
    pub withdrawals: f64,
    pub balance: f64,
}

/// Composite financial health score in [0, 100] with its assessment band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthScore {
    pub score: u32,
    pub assessment: &'static str,
}

/// One budget item compared against actual spending in its category.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    pub priority: BudgetPriority,
    pub budgeted: f64,
    pub actual: f64,
    pub variance: f64,
    pub usage_percent: f64,
}

/// Per-item budget comparison plus overall utilization.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAnalysis {
    pub lines: Vec<BudgetLine>,
    pub total_budget: f64,
    pub total_actual: f64,
    pub remaining: f64,
    pub utilization_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    pub income: f64,
    pub expenses: f64,
    /// Income minus expenses minus deposits plus withdrawals: what is left
    /// flowing through the period after savings movements.
    pub net_flow: f64,
    pub savings_rate: f64,
    pub liquidity_ratio: f64,
    pub budget_adherence: f64,
    pub expense_ratio: f64,
    pub daily_average: f64,
    pub projected_month_end: f64,
}

/// Averages across every period that recorded at least one transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllTimeStats {
    pub average_monthly_income: f64,
    pub average_monthly_expenses: f64,
    pub total_saved: f64,
    pub months_tracked: usize,
}

/// Share of one source label in a period's income or expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceShare {
    pub source: String,
    pub amount: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analytics {
    pub cash_flow: f64,
    pub burn_rate: f64,
    /// 25x annual expenses, the usual financial-independence estimate.
    pub freedom_number: f64,
    pub emergency_months: f64,
}

/// 50/30/20-rule calculator output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsPlan {
    pub recommended: f64,
    pub max_possible: f64,
    pub current_potential: f64,
}

pub struct MetricsService;

impl MetricsService {
    pub fn total_of_kind(record: &PeriodRecord, kind: TransactionKind) -> f64 {
        record
            .transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn income_total(record: &PeriodRecord) -> f64 {
        Self::total_of_kind(record, TransactionKind::Income)
    }

    pub fn expense_total(record: &PeriodRecord) -> f64 {
        Self::total_of_kind(record, TransactionKind::Expense)
    }

    pub fn savings_totals(record: &PeriodRecord) -> SavingsTotals {
        let mut deposits = 0.0;
        let mut withdrawals = 0.0;
        for entry in &record.savings {
            match entry.kind {
                SavingsKind::Deposit => deposits += entry.amount,
                SavingsKind::Withdrawal => withdrawals += entry.amount,
            }
        }
        SavingsTotals {
            deposits,
            withdrawals,
            balance: deposits - withdrawals,
        }
    }

    /// Net savings movement for entries dated inside the given calendar
    /// month.
    pub fn month_net_savings(record: &PeriodRecord, period: PeriodId) -> f64 {
        record
            .savings
            .iter()
            .filter(|entry| PeriodId::from_date(entry.date) == period)
            .map(|entry| entry.signed_amount())
            .sum()
    }

    /// Composite health score built from four components: savings rate
    /// (0-30), emergency fund coverage (0-25), budget adherence (0-25), and
    /// income stability (0-20).
    pub fn health_score(record: &PeriodRecord) -> HealthScore {
        let income = Self::income_total(record);
        let expenses = Self::expense_total(record);
        let savings = Self::savings_totals(record);
        let mut score = 0.0;

        if income > 0.0 {
            let rate = (income - expenses) / income * 100.0;
            score += if rate >= 20.0 {
                30.0
            } else if rate >= 10.0 {
                20.0
            } else if rate >= 5.0 {
                10.0
            } else if rate > 0.0 {
                5.0
            } else {
                0.0
            };
        }

        if expenses > 0.0 {
            let months_covered = savings.balance / expenses;
            score += if months_covered >= 6.0 {
                25.0
            } else if months_covered >= 3.0 {
                20.0
            } else if months_covered >= 1.0 {
                10.0
            } else if months_covered > 0.0 {
                5.0
            } else {
                0.0
            };
        }

        if !record.budget_items.is_empty() {
            let total_budget = sum_amounts(&record.budget_items);
            if total_budget > 0.0 && expenses <= total_budget {
                let adherence = (total_budget - expenses) / total_budget;
                score += (adherence * 100.0).min(25.0);
            }
        }

        if income > 0.0 {
            score += 20.0;
        }

        let score = score.round() as u32;
        HealthScore {
            score,
            assessment: assessment_for(score),
        }
    }

    /// Compares each declared budget item against actual spending, where
    /// actuals are expense transactions bucketed by canonical category.
    pub fn budget_analysis(record: &PeriodRecord) -> BudgetAnalysis {
        let mut actual_by_category: HashMap<&'static str, f64> = HashMap::new();
        for txn in record
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
        {
            *actual_by_category
                .entry(canonical_category(&txn.source))
                .or_default() += txn.amount;
        }

        let lines = record
            .budget_items
            .iter()
            .map(|item| {
                let actual = actual_by_category
                    .get(item.category.as_str())
                    .copied()
                    .unwrap_or(0.0);
                let usage_percent = if item.amount > 0.0 {
                    actual / item.amount * 100.0
                } else {
                    0.0
                };
                BudgetLine {
                    category: item.category.clone(),
                    priority: item.priority,
                    budgeted: item.amount,
                    actual,
                    variance: item.amount - actual,
                    usage_percent,
                }
            })
            .collect();

        let total_budget = sum_amounts(&record.budget_items);
        let total_actual: f64 = actual_by_category.values().sum();
        BudgetAnalysis {
            lines,
            total_budget,
            total_actual,
            remaining: total_budget - total_actual,
            utilization_percent: if total_budget > 0.0 {
                total_actual / total_budget * 100.0
            } else {
                0.0
            },
        }
    }

    /// Headline numbers for one period. `today` drives the daily average
    /// and the month-end projection, which is why it is passed in rather
    /// than read from the wall clock.
    pub fn dashboard(record: &PeriodRecord, period: PeriodId, today: NaiveDate) -> DashboardMetrics {
        let income = Self::income_total(record);
        let expenses = Self::expense_total(record);
        let savings = Self::savings_totals(record);

        let total_budget = sum_amounts(&record.budget_items);
        let budget_adherence = if total_budget > 0.0 && expenses <= total_budget {
            ((1.0 - (expenses - total_budget) / total_budget) * 100.0).max(0.0)
        } else {
            0.0
        };

        let daily_average = expenses / f64::from(today.day());
        DashboardMetrics {
            income,
            expenses,
            net_flow: income - expenses - savings.deposits + savings.withdrawals,
            savings_rate: ratio(income - expenses, income),
            liquidity_ratio: ratio(savings.balance, expenses),
            budget_adherence,
            expense_ratio: ratio(expenses, income),
            daily_average,
            projected_month_end: income - daily_average * f64::from(period.days_in_month()),
        }
    }

    /// Averages over every period with at least one transaction; periods
    /// that only carry savings or budget data are not counted as tracked
    /// months.
    pub fn all_time(store: &Store) -> AllTimeStats {
        let mut months = 0usize;
        let mut income = 0.0;
        let mut expenses = 0.0;
        for (_, record) in store.periods() {
            if !record.has_transactions() {
                continue;
            }
            months += 1;
            income += Self::income_total(record);
            expenses += Self::expense_total(record);
        }

        let average = |total: f64| if months > 0 { total / months as f64 } else { 0.0 };
        AllTimeStats {
            average_monthly_income: average(income),
            average_monthly_expenses: average(expenses),
            total_saved: income - expenses,
            months_tracked: months,
        }
    }

    /// Largest expense sources first, truncated to `top`, with each share
    /// expressed as a percent of total expenses.
    pub fn expense_breakdown(record: &PeriodRecord, top: usize) -> Vec<SourceShare> {
        let mut shares = breakdown(record, TransactionKind::Expense);
        shares.truncate(top);
        shares
    }

    pub fn income_breakdown(record: &PeriodRecord) -> Vec<SourceShare> {
        breakdown(record, TransactionKind::Income)
    }

    pub fn analytics(record: &PeriodRecord) -> Analytics {
        let income = Self::income_total(record);
        let expenses = Self::expense_total(record);
        let emergency_fund = record.budget.emergency_fund;
        Analytics {
            cash_flow: income - expenses,
            burn_rate: expenses,
            freedom_number: expenses * 12.0 * 25.0,
            emergency_months: if emergency_fund > 0.0 && expenses > 0.0 {
                emergency_fund / expenses
            } else {
                0.0
            },
        }
    }

    /// 50/30/20-rule calculator over plain inputs; not tied to the ledger.
    pub fn savings_plan(income: f64, essential: f64, discretionary: f64) -> SavingsPlan {
        SavingsPlan {
            recommended: income * 0.20,
            max_possible: (income - essential).max(0.0),
            current_potential: (income - essential - discretionary).max(0.0),
        }
    }
}

fn ratio(value: f64, base: f64) -> f64 {
    if base > 0.0 {
        value / base * 100.0
    } else {
        0.0
    }
}

fn assessment_for(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent financial health! You're on track for financial freedom."
    } else if score >= 75 {
        "Very good financial health. Keep up the great work!"
    } else if score >= 60 {
        "Good financial health with room for improvement."
    } else if score >= 40 {
        "Fair financial health. Consider increasing savings and budgeting."
    } else if score >= 20 {
        "Poor financial health. Focus on budgeting and reducing expenses."
    } else {
        "Critical financial situation. Immediate action needed."
    }
}

fn breakdown(record: &PeriodRecord, kind: TransactionKind) -> Vec<SourceShare> {
    let total = MetricsService::total_of_kind(record, kind);
    let mut by_source: HashMap<&str, f64> = HashMap::new();
    for txn in record.transactions.iter().filter(|t| t.kind == kind) {
        *by_source.entry(txn.source.as_str()).or_default() += txn.amount;
    }

    let mut shares: Vec<SourceShare> = by_source
        .into_iter()
        .map(|(source, amount)| SourceShare {
            source: source.to_string(),
            amount,
            percent: ratio(amount, total),
        })
        .collect();
    // Largest first; ties broken by label so the ordering is stable.
    shares.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.source.cmp(&b.source))
    });
    shares
}
