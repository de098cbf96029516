use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::{AmortizationError, Result};
use crate::types::{BaselinePayment, LoanTerms, PaymentPolicy, Termination};

use super::baseline::level_payment;
use super::savings::AdditionalPaymentImpact;
use super::{AmortizationResult, ScheduleEntry, Totals};

/// period-by-period loan payoff simulator
///
/// Holds nothing but its configuration, so one engine can be shared freely
/// between threads and every call is independent of the previous ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

/// outcome of a single simulated period
enum Step {
    Entry(ScheduleEntry),
    Overflow,
}

impl AmortizationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// regular payment before any additional payment
    pub fn baseline_payment(&self, terms: &LoanTerms) -> Result<Money> {
        terms.validate()?;
        match terms.baseline {
            BaselinePayment::Term { months } => {
                level_payment(terms.principal, terms.annual_rate, months)
            }
            BaselinePayment::Fixed { amount } => Ok(amount),
        }
    }

    /// simulate the loan until it is paid off or the period bound is hit
    pub fn amortize(&self, terms: &LoanTerms, policy: &PaymentPolicy) -> Result<AmortizationResult> {
        policy.validate()?;
        let payment = self.baseline_payment(terms)?;
        let additional = policy.additional_payment;
        let monthly_rate = terms.monthly_rate().as_decimal();

        // a fixed term converges by construction, a supplied payment may not
        let (limit, fixed_term) = match terms.baseline {
            BaselinePayment::Term { months } => (months, true),
            BaselinePayment::Fixed { .. } => (self.config.max_periods, false),
        };

        let mut entries = Vec::new();
        let mut totals = Totals::default();
        let mut balance = terms.principal;
        let mut termination = None;

        for period in 1..=limit {
            let is_final_term_period = fixed_term && period == limit;
            let step = self.step(
                period,
                balance,
                monthly_rate,
                payment,
                additional,
                is_final_term_period,
            );
            let entry = match step {
                Step::Entry(entry) => entry,
                Step::Overflow => {
                    warn!(
                        period,
                        balance = %balance,
                        "balance diverged beyond decimal range, stopping simulation"
                    );
                    termination = Some(Termination::NonAmortizing);
                    break;
                }
            };

            totals = match totals.record(&entry) {
                Some(totals) => totals,
                None if entry.principal_portion.is_positive() => {
                    return Err(AmortizationError::CalculationError {
                        message: format!("decimal overflow accumulating totals at period {period}"),
                    });
                }
                None => {
                    warn!(
                        period,
                        total_payment = %totals.payment,
                        "schedule totals exceed decimal range, stopping simulation"
                    );
                    termination = Some(Termination::NonAmortizing);
                    break;
                }
            };
            balance = entry.remaining_balance;
            entries.push(entry);

            if balance.is_zero() {
                termination = Some(Termination::PaidOff);
                break;
            }
        }

        let termination = termination.unwrap_or_else(|| {
            if fixed_term {
                Termination::TermExhausted
            } else if entries.last().map_or(true, |e| !e.principal_portion.is_positive()) {
                Termination::NonAmortizing
            } else {
                Termination::PeriodCapReached
            }
        });

        match termination {
            Termination::PaidOff => {}
            Termination::NonAmortizing => warn!(
                payment = %payment,
                additional = %additional,
                periods = entries.len(),
                "payment does not cover accruing interest, loan never pays off"
            ),
            _ => warn!(
                periods = entries.len(),
                balance = %balance,
                "simulation stopped before the loan was paid off"
            ),
        }

        let result = AmortizationResult::from_entries(
            payment,
            additional,
            entries,
            totals,
            termination,
            self.config.payoff_tolerance,
            self.config.days_per_period,
        );

        debug!(
            principal = %terms.principal,
            rate = %terms.annual_rate,
            baseline_payment = %result.baseline_payment,
            periods = result.len(),
            payoff_period = ?result.payoff_period,
            total_interest = %result.total_interest,
            "amortization schedule computed"
        );

        Ok(result)
    }

    /// run with and without the policy's additional payment
    pub fn compare_additional(
        &self,
        terms: &LoanTerms,
        policy: &PaymentPolicy,
    ) -> Result<AdditionalPaymentImpact> {
        let baseline = self.amortize(terms, &PaymentPolicy::none())?;
        let accelerated = self.amortize(terms, policy)?;
        Ok(AdditionalPaymentImpact::new(baseline, accelerated))
    }

    fn step(
        &self,
        period: u32,
        opening_balance: Money,
        monthly_rate: Decimal,
        payment: Money,
        additional: Money,
        is_final_term_period: bool,
    ) -> Step {
        let Some(interest) = opening_balance.checked_mul(monthly_rate) else {
            return Step::Overflow;
        };
        let Some(mut principal) = payment
            .checked_sub(interest)
            .and_then(|p| p.checked_add(additional))
        else {
            return Step::Overflow;
        };
        let Some(mut balance) = opening_balance.checked_sub(principal) else {
            return Step::Overflow;
        };
        let mut additional_applied = additional;

        // overpayment: only take what the balance still needs
        if balance.is_negative() {
            principal = opening_balance;
            additional_applied = (additional + balance).max(Money::ZERO);
            balance = Money::ZERO;
        }

        // rounding dust left on the last period of a fixed term
        if is_final_term_period
            && balance.is_positive()
            && balance <= self.config.payoff_tolerance
        {
            principal = opening_balance;
            balance = Money::ZERO;
        }

        let Some(total_payment) = principal.checked_add(interest) else {
            return Step::Overflow;
        };

        Step::Entry(ScheduleEntry {
            period,
            total_payment,
            interest_portion: interest,
            principal_portion: principal,
            additional_applied,
            remaining_balance: balance,
        })
    }
}
