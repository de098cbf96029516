pub mod baseline;
pub mod engine;
pub mod payoff;
pub mod savings;

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::Termination;

pub use baseline::level_payment;
pub use engine::AmortizationEngine;
pub use payoff::Payoff;
pub use savings::AdditionalPaymentImpact;

/// one period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period index
    pub period: u32,
    /// always `interest_portion + principal_portion`
    pub total_payment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    /// extra payment actually needed this period, lower than the nominal amount on the final period
    pub additional_applied: Money,
    pub remaining_balance: Money,
}

/// running payment and interest totals of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub payment: Money,
    pub interest: Money,
}

impl Totals {
    /// totals including `entry`, `None` once they leave the decimal range
    pub fn record(self, entry: &ScheduleEntry) -> Option<Self> {
        Some(Self {
            payment: self.payment.checked_add(entry.total_payment)?,
            interest: self.interest.checked_add(entry.interest_portion)?,
        })
    }
}

/// full schedule for one loan plus its summary figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub baseline_payment: Money,
    pub additional_payment: Money,
    pub entries: Vec<ScheduleEntry>,
    pub total_payment: Money,
    pub total_interest: Money,
    pub payoff_period: Option<u32>,
    pub termination: Termination,
    pub days_per_period: u32,
}

impl AmortizationResult {
    pub(crate) fn from_entries(
        baseline_payment: Money,
        additional_payment: Money,
        entries: Vec<ScheduleEntry>,
        totals: Totals,
        termination: Termination,
        payoff_tolerance: Money,
        days_per_period: u32,
    ) -> Self {
        let payoff_period = entries
            .iter()
            .find(|e| e.remaining_balance <= payoff_tolerance)
            .map(|e| e.period);

        Self {
            baseline_payment,
            additional_payment,
            entries,
            total_payment: totals.payment,
            total_interest: totals.interest,
            payoff_period,
            termination,
            days_per_period,
        }
    }

    /// get entry for specific period
    pub fn get_entry(&self, period: u32) -> Option<&ScheduleEntry> {
        period
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx as usize))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_paid_off(&self) -> bool {
        self.payoff_period.is_some()
    }

    /// `None` if the sum leaves the decimal range
    pub fn total_principal(&self) -> Option<Money> {
        Money::checked_sum(self.entries.iter().map(|e| e.principal_portion))
    }

    pub fn total_additional(&self) -> Option<Money> {
        Money::checked_sum(self.entries.iter().map(|e| e.additional_applied))
    }

    /// balance left after the last simulated period
    pub fn final_balance(&self) -> Option<Money> {
        self.entries.last().map(|e| e.remaining_balance)
    }

    /// payoff projected from an explicit start date
    ///
    /// `None` when the loan is never paid off or the date falls outside the
    /// calendar range.
    pub fn payoff_from(&self, start: DateTime<Utc>) -> Option<Payoff> {
        self.payoff_period
            .and_then(|period| Payoff::project(start, period, self.days_per_period))
    }

    /// payoff projected from the provider's current time
    pub fn payoff(&self, time_provider: &SafeTimeProvider) -> Option<Payoff> {
        self.payoff_from(time_provider.now())
    }
}
