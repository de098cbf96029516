use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{AmortizationError, Result};

/// hard cap on simulated periods when the payment is supplied directly
pub const DEFAULT_MAX_PERIODS: u32 = 1000;

/// days added per period when mapping a payoff period to a calendar date
pub const DEFAULT_DAYS_PER_PERIOD: u32 = 30;

/// longest period accepted when projecting payoff dates
pub const MAX_DAYS_PER_PERIOD: u32 = 31;

/// balance at or below which a loan counts as paid off
pub const DEFAULT_PAYOFF_TOLERANCE: Money = Money::CENT;

/// engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_periods: u32,
    pub payoff_tolerance: Money,
    /// the payoff date is `start + days_per_period * period`, not calendar months
    pub days_per_period: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_periods: DEFAULT_MAX_PERIODS,
            payoff_tolerance: DEFAULT_PAYOFF_TOLERANCE,
            days_per_period: DEFAULT_DAYS_PER_PERIOD,
        }
    }
}

impl EngineConfig {
    pub fn with_max_periods(mut self, max_periods: u32) -> Self {
        self.max_periods = max_periods;
        self
    }

    pub fn with_payoff_tolerance(mut self, tolerance: Money) -> Self {
        self.payoff_tolerance = tolerance;
        self
    }

    pub fn with_days_per_period(mut self, days: u32) -> Self {
        self.days_per_period = days;
        self
    }

    /// parse a json document, missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| AmortizationError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_periods == 0 {
            return Err(AmortizationError::InvalidConfiguration {
                message: "max_periods must be at least 1".to_string(),
            });
        }
        if self.payoff_tolerance.is_negative() {
            return Err(AmortizationError::InvalidConfiguration {
                message: format!("payoff_tolerance must not be negative, got {}", self.payoff_tolerance),
            });
        }
        if self.payoff_tolerance > Money::from_decimal(dec!(1)) {
            return Err(AmortizationError::InvalidConfiguration {
                message: format!("payoff_tolerance above one currency unit: {}", self.payoff_tolerance),
            });
        }
        if self.days_per_period == 0 || self.days_per_period > MAX_DAYS_PER_PERIOD {
            return Err(AmortizationError::InvalidConfiguration {
                message: format!(
                    "days_per_period must be between 1 and {MAX_DAYS_PER_PERIOD}, got {}",
                    self.days_per_period
                ),
            });
        }
        Ok(())
    }
}
