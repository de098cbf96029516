use serde::{Deserialize, Serialize};

use crate::decimal::Money;

use super::AmortizationResult;

/// effect of an additional payment compared with paying the baseline only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalPaymentImpact {
    pub baseline: AmortizationResult,
    pub accelerated: AmortizationResult,
}

impl AdditionalPaymentImpact {
    pub fn new(baseline: AmortizationResult, accelerated: AmortizationResult) -> Self {
        Self {
            baseline,
            accelerated,
        }
    }

    /// interest avoided; zero or negative only when the extra payment made no difference
    pub fn interest_saved(&self) -> Money {
        self.baseline.total_interest - self.accelerated.total_interest
    }

    /// periods shaved off the payoff, `None` unless both runs pay off
    pub fn periods_saved(&self) -> Option<u32> {
        match (self.baseline.payoff_period, self.accelerated.payoff_period) {
            (Some(base), Some(fast)) => Some(base.saturating_sub(fast)),
            _ => None,
        }
    }

    /// the extra payment turns a loan that never pays off into one that does
    pub fn rescues_payoff(&self) -> bool {
        !self.baseline.is_paid_off() && self.accelerated.is_paid_off()
    }
}
