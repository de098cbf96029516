pub mod config;
pub mod decimal;
pub mod errors;
pub mod loan;
pub mod logging;
pub mod report;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::EngineConfig;
pub use decimal::{Money, Rate};
pub use errors::{AmortizationError, Result};
pub use loan::{Loan, LoanBuilder};
pub use logging::init_tracing;
pub use report::{format_currency, ScheduleTable, ScheduleView, SummaryTable};
pub use schedule::{
    level_payment, AdditionalPaymentImpact, AmortizationEngine, AmortizationResult, Payoff,
    ScheduleEntry,
};
pub use types::{BaselinePayment, LoanId, LoanTerms, PaymentPolicy, Termination};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
