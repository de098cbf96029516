use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{AmortizationError, Result};
use crate::schedule::{AmortizationEngine, AmortizationResult, Payoff};
use crate::types::{BaselinePayment, LoanId, LoanTerms, PaymentPolicy};

/// a named loan: the four numbers a caller edits plus an identity to store them under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub name: String,
    pub terms: LoanTerms,
    pub policy: PaymentPolicy,
}

impl Loan {
    /// builder for creating loans
    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }

    /// copy of this loan with a different additional payment
    pub fn with_additional_payment(&self, amount: Money) -> Result<Self> {
        let policy = PaymentPolicy::new(amount);
        policy.validate()?;
        Ok(Self {
            policy,
            ..self.clone()
        })
    }

    pub fn baseline_monthly_payment(&self) -> Result<Money> {
        AmortizationEngine::new().baseline_payment(&self.terms)
    }

    /// schedule with the default engine
    pub fn amortization_schedule(&self) -> Result<AmortizationResult> {
        self.amortization_schedule_with(&AmortizationEngine::new())
    }

    pub fn amortization_schedule_with(&self, engine: &AmortizationEngine) -> Result<AmortizationResult> {
        engine.amortize(&self.terms, &self.policy)
    }

    pub fn total_payment(&self) -> Result<Money> {
        Ok(self.amortization_schedule()?.total_payment)
    }

    pub fn total_interest(&self) -> Result<Money> {
        Ok(self.amortization_schedule()?.total_interest)
    }

    /// projected payoff relative to the provider's current time, `None` if never paid off
    pub fn payoff_date(&self, time_provider: &SafeTimeProvider) -> Result<Option<Payoff>> {
        Ok(self.amortization_schedule()?.payoff(time_provider))
    }

    /// pretty json of the stored parameters
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// parse and validate a loan previously written with `to_json_pretty`
    pub fn from_json(json: &str) -> Result<Self> {
        let loan: Loan =
            serde_json::from_str(json).map_err(|e| AmortizationError::Serialization {
                message: e.to_string(),
            })?;
        loan.terms.validate()?;
        loan.policy.validate()?;
        Ok(loan)
    }
}

/// loan builder
#[derive(Debug, Default)]
pub struct LoanBuilder {
    id: Option<LoanId>,
    name: Option<String>,
    amount: Option<Money>,
    rate: Option<Rate>,
    baseline: Option<BaselinePayment>,
    additional_payment: Option<Money>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: LoanId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    /// level payment over a fixed number of months
    pub fn term_months(mut self, months: u32) -> Self {
        self.baseline = Some(BaselinePayment::Term { months });
        self
    }

    /// payment given directly instead of a term
    pub fn monthly_payment(mut self, amount: Money) -> Self {
        self.baseline = Some(BaselinePayment::Fixed { amount });
        self
    }

    pub fn additional_payment(mut self, amount: Money) -> Self {
        self.additional_payment = Some(amount);
        self
    }

    pub fn build(self) -> Result<Loan> {
        let amount = self.amount.ok_or_else(|| missing("amount"))?;
        let rate = self.rate.ok_or_else(|| missing("rate"))?;
        let baseline = self
            .baseline
            .ok_or_else(|| missing("term_months or monthly_payment"))?;

        let terms = LoanTerms {
            principal: amount,
            annual_rate: rate,
            baseline,
        };
        terms.validate()?;

        let policy = PaymentPolicy::new(self.additional_payment.unwrap_or(Money::ZERO));
        policy.validate()?;

        Ok(Loan {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.unwrap_or_else(|| "Loan".to_string()),
            terms,
            policy,
        })
    }
}

fn missing(field: &str) -> AmortizationError {
    AmortizationError::InvalidConfiguration {
        message: format!("{field} is required"),
    }
}
