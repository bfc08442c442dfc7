//! Plain-text report rendering for a single period.

use chrono::NaiveDate;
use monthbook_domain::{PeriodId, PeriodRecord};

use crate::metrics_service::MetricsService;

pub struct ReportService;

impl ReportService {
    /// Renders the header, summary block, and itemized transaction lines
    /// for one period. Amounts are fixed two-decimal USD.
    pub fn period_report(
        record: &PeriodRecord,
        period: PeriodId,
        generated_on: NaiveDate,
    ) -> String {
        let income = MetricsService::income_total(record);
        let expenses = MetricsService::expense_total(record);
        let balance = income - expenses;
        let savings_rate = if income > 0.0 {
            balance / income * 100.0
        } else {
            0.0
        };

        let mut report = String::new();
        report.push_str("MONTHBOOK FINANCIAL REPORT\n");
        report.push_str(&format!("Generated: {generated_on}\n"));
        report.push_str(&format!("Period: {}\n\n", period.label()));
        report.push_str("SUMMARY:\n");
        report.push_str(&format!("Total Income: ${income:.2}\n"));
        report.push_str(&format!("Total Expenses: ${expenses:.2}\n"));
        report.push_str(&format!("Net Balance: ${balance:.2}\n"));
        report.push_str(&format!("Savings Rate: {savings_rate:.1}%\n\n"));
        report.push_str("TRANSACTIONS:\n");
        for txn in &record.transactions {
            report.push_str(&format!(
                "{} | {} | {} | ${:.2}",
                txn.date,
                txn.kind.to_string().to_uppercase(),
                txn.source,
                txn.amount
            ));
            if let Some(description) = &txn.description {
                report.push_str(&format!(" | {description}"));
            }
            report.push('\n');
        }
        report
    }
}
