use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmortizationError {
    #[error("negative principal: {principal}")]
    NegativePrincipal {
        principal: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {months} months, term must be at least one month")]
    InvalidTerm {
        months: u32,
    },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("invalid additional payment: {amount}")]
    InvalidAdditionalPayment {
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl AmortizationError {
    /// true when the error was raised by input validation, before any simulation ran
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AmortizationError::NegativePrincipal { .. }
                | AmortizationError::InvalidInterestRate { .. }
                | AmortizationError::InvalidTerm { .. }
                | AmortizationError::InvalidPaymentAmount { .. }
                | AmortizationError::InvalidAdditionalPayment { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AmortizationError>;
