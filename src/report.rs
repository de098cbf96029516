//! Presentation helpers for callers that render schedules.
//!
//! The engine keeps full decimal precision; everything here rounds to cents
//! for display only.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::schedule::{AmortizationResult, ScheduleEntry};
use crate::types::Termination;

/// `$1,234.56` style, two decimals with comma thousands separators
pub fn format_currency(amount: Money) -> String {
    let rounded = amount.round_dp(2).as_decimal();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// headline figures table: monthly payment, totals and payoff date
pub struct SummaryTable<'a> {
    result: &'a AmortizationResult,
    start: DateTime<Utc>,
}

impl<'a> SummaryTable<'a> {
    pub fn new(result: &'a AmortizationResult, start: DateTime<Utc>) -> Self {
        Self { result, start }
    }
}

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payoff = self
            .result
            .payoff_from(self.start)
            .map(|p| p.year_month())
            .unwrap_or_else(|| "never".to_string());

        writeln!(
            f,
            "{:>16} {:>16} {:>16} {:>12}",
            "Monthly payment", "Total payment", "Total interest", "Payoff date"
        )?;
        writeln!(
            f,
            "{:>16} {:>16} {:>16} {:>12}",
            format_currency(self.result.baseline_payment),
            format_currency(self.result.total_payment),
            format_currency(self.result.total_interest),
            payoff
        )
    }
}

/// per-period table matching the schedule columns
pub struct ScheduleTable<'a> {
    entries: &'a [ScheduleEntry],
}

impl<'a> ScheduleTable<'a> {
    pub fn new(result: &'a AmortizationResult) -> Self {
        Self {
            entries: &result.entries,
        }
    }
}

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} {:>14} {:>14} {:>14} {:>14} {:>16}",
            "Month", "Payment", "Interest", "Principal", "Additional", "Remaining"
        )?;
        for e in self.entries {
            writeln!(
                f,
                "{:>5} {:>14} {:>14} {:>14} {:>14} {:>16}",
                e.period,
                format_currency(e.total_payment),
                format_currency(e.interest_portion),
                format_currency(e.principal_portion),
                format_currency(e.additional_applied),
                format_currency(e.remaining_balance),
            )?;
        }
        Ok(())
    }
}

/// serializable view of a computed schedule
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleView {
    pub summary: SummaryView,
    pub entries: Vec<ScheduleEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub baseline_payment: Money,
    pub additional_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub periods: usize,
    pub payoff_period: Option<u32>,
    pub payoff_month: Option<String>,
    pub termination: Termination,
}

impl ScheduleView {
    pub fn from_result(result: &AmortizationResult, start: DateTime<Utc>) -> Self {
        ScheduleView {
            summary: SummaryView {
                baseline_payment: result.baseline_payment,
                additional_payment: result.additional_payment,
                total_payment: result.total_payment,
                total_interest: result.total_interest,
                periods: result.len(),
                payoff_period: result.payoff_period,
                payoff_month: result.payoff_from(start).map(|p| p.year_month()),
                termination: result.termination,
            },
            entries: result.entries.clone(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
