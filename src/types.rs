use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{AmortizationError, Result};

/// opaque identifier a persistence layer keys loans by
pub type LoanId = Uuid;

/// how the regular scheduled payment is established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePayment {
    /// level payment that amortizes the principal over exactly this many months
    Term { months: u32 },
    /// payment supplied directly, which may not be enough to amortize
    Fixed { amount: Money },
}

impl BaselinePayment {
    pub fn term_months(&self) -> Option<u32> {
        match self {
            BaselinePayment::Term { months } => Some(*months),
            BaselinePayment::Fixed { .. } => None,
        }
    }
}

/// principal, rate and baseline payment of a single loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// nominal annual rate as a fraction (0.035 for 3.5%)
    pub annual_rate: Rate,
    pub baseline: BaselinePayment,
}

impl LoanTerms {
    pub fn with_term(principal: Money, annual_rate: Rate, months: u32) -> Self {
        Self {
            principal,
            annual_rate,
            baseline: BaselinePayment::Term { months },
        }
    }

    pub fn with_payment(principal: Money, annual_rate: Rate, amount: Money) -> Self {
        Self {
            principal,
            annual_rate,
            baseline: BaselinePayment::Fixed { amount },
        }
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }

    /// reject values outside their documented domain
    pub fn validate(&self) -> Result<()> {
        if self.principal.is_negative() {
            return Err(AmortizationError::NegativePrincipal {
                principal: self.principal,
            });
        }

        if self.annual_rate.is_negative() {
            return Err(AmortizationError::InvalidInterestRate {
                rate: self.annual_rate,
            });
        }

        match self.baseline {
            BaselinePayment::Term { months } if months == 0 => {
                Err(AmortizationError::InvalidTerm { months })
            }
            BaselinePayment::Fixed { amount } if amount.is_negative() => {
                Err(AmortizationError::InvalidPaymentAmount { amount })
            }
            _ => Ok(()),
        }
    }
}

/// extra payment applied every period on top of the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentPolicy {
    pub additional_payment: Money,
}

impl PaymentPolicy {
    pub fn new(additional_payment: Money) -> Self {
        Self { additional_payment }
    }

    /// baseline payment only
    pub fn none() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.additional_payment.is_negative() {
            return Err(AmortizationError::InvalidAdditionalPayment {
                amount: self.additional_payment,
            });
        }
        Ok(())
    }
}

/// why a simulation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// balance reached exactly zero
    PaidOff,
    /// every period of a fixed term was simulated without clearing the balance
    TermExhausted,
    /// period cap reached while the balance was still going down
    PeriodCapReached,
    /// payments no longer reduce the balance, so the loan can never be paid off
    NonAmortizing,
}
