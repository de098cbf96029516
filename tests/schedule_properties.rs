use amortization_rs::chrono::{TimeZone, Utc};
use amortization_rs::{
    AmortizationEngine, AmortizationError, Decimal, EngineConfig, LoanTerms, Money, PaymentPolicy,
    Rate, Termination,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;

fn engine() -> AmortizationEngine {
    AmortizationEngine::new()
}

// whole-dollar principals, rates up to 60% in basis points, terms up to 30 years
fn fixed_term_loan() -> impl Strategy<Value = LoanTerms> {
    (1_000i64..1_000_000, 0u32..=6_000, 1u32..=360).prop_map(|(principal, bps, months)| {
        LoanTerms::with_term(Money::from_major(principal), Rate::from_bps(bps), months)
    })
}

fn fixed_payment_loan() -> impl Strategy<Value = LoanTerms> {
    (1_000i64..500_000, 0u32..=1_500, 10i64..20_000).prop_map(|(principal, bps, payment)| {
        LoanTerms::with_payment(
            Money::from_major(principal),
            Rate::from_bps(bps),
            Money::from_major(payment),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn level_payment_pays_off_exactly_at_term(terms in fixed_term_loan()) {
        let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();
        let months = terms.baseline.term_months().unwrap();

        prop_assert_eq!(result.termination, Termination::PaidOff);
        prop_assert_eq!(result.len(), months as usize);
        prop_assert_eq!(result.payoff_period, Some(months));
        prop_assert_eq!(result.final_balance(), Some(Money::ZERO));
    }

    #[test]
    fn payment_is_interest_plus_principal(terms in fixed_payment_loan(), extra in 0i64..2_000) {
        let result = engine().amortize(&terms, &PaymentPolicy::new(Money::from_major(extra))).unwrap();
        for entry in &result.entries {
            prop_assert_eq!(entry.total_payment, entry.interest_portion + entry.principal_portion);
        }
    }

    #[test]
    fn balance_never_negative(terms in fixed_payment_loan(), extra in 0i64..2_000) {
        let result = engine().amortize(&terms, &PaymentPolicy::new(Money::from_major(extra))).unwrap();
        for entry in &result.entries {
            prop_assert!(!entry.remaining_balance.is_negative());
            prop_assert!(!entry.additional_applied.is_negative());
            prop_assert!(entry.additional_applied <= Money::from_major(extra));
        }
    }

    #[test]
    fn balance_declines_when_payment_covers_interest(terms in fixed_term_loan(), extra in 0i64..2_000) {
        let result = engine().amortize(&terms, &PaymentPolicy::new(Money::from_major(extra))).unwrap();
        let mut previous = terms.principal;
        for entry in &result.entries {
            prop_assert!(entry.remaining_balance <= previous);
            previous = entry.remaining_balance;
        }
    }

    #[test]
    fn additional_payment_never_delays_payoff(
        terms in fixed_payment_loan(),
        low in 0i64..1_000,
        bump in 0i64..1_000,
    ) {
        let slow = engine().amortize(&terms, &PaymentPolicy::new(Money::from_major(low))).unwrap();
        let fast = engine().amortize(&terms, &PaymentPolicy::new(Money::from_major(low + bump))).unwrap();

        if let Some(slow_period) = slow.payoff_period {
            let fast_period = fast.payoff_period;
            prop_assert!(fast_period.is_some());
            prop_assert!(fast_period.unwrap() <= slow_period);
            prop_assert!(fast.total_interest <= slow.total_interest);
        }
    }

    #[test]
    fn same_inputs_same_schedule(terms in fixed_payment_loan(), extra in 0i64..500) {
        let policy = PaymentPolicy::new(Money::from_major(extra));
        let first = engine().amortize(&terms, &policy).unwrap();
        let second = engine().amortize(&terms, &policy).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_rate_means_no_interest(principal in 100i64..1_000_000, months in 1u32..=480) {
        let terms = LoanTerms::with_term(Money::from_major(principal), Rate::ZERO, months);
        let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();

        prop_assert_eq!(
            result.baseline_payment,
            Money::from_decimal(rust_decimal::Decimal::from(principal) / rust_decimal::Decimal::from(months))
        );
        prop_assert!(result.entries.iter().all(|e| e.interest_portion.is_zero()));
        prop_assert_eq!(result.total_interest, Money::ZERO);
        prop_assert_eq!(result.payoff_period, Some(months));
    }
}

#[test]
fn fixed_term_scenario() {
    let terms = LoanTerms::with_term(Money::from_major(100_000), Rate::from_decimal(dec!(0.035)), 36);
    let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();

    assert_eq!(result.baseline_payment.round_dp(2), Money::from_decimal(dec!(2930.21)));
    assert_eq!(result.payoff_period, Some(36));
    assert_eq!(result.get_entry(36).unwrap().remaining_balance, Money::ZERO);
}

#[test]
fn direct_payment_scenario() {
    let terms = LoanTerms::with_payment(
        Money::from_major(10_000),
        Rate::from_decimal(dec!(0.075)),
        Money::from_major(1_000),
    );
    let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();

    assert_eq!(result.payoff_period, Some(11));
    let last = result.entries.last().unwrap();
    let before_last = result.get_entry(10).unwrap().remaining_balance;
    assert_eq!(last.principal_portion, before_last);
    assert_eq!(last.remaining_balance, Money::ZERO);
}

#[test]
fn insufficient_payment_scenario() {
    let terms = LoanTerms::with_payment(
        Money::from_major(100_000),
        Rate::from_decimal(dec!(0.10)),
        Money::from_major(500),
    );
    let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();

    assert_eq!(result.len(), engine().config().max_periods as usize);
    assert_eq!(result.payoff_period, None);
    assert_eq!(result.termination, Termination::NonAmortizing);
}

#[test]
fn high_rate_thirty_year_loan_scenario() {
    let terms = LoanTerms::with_term(Money::from_major(1_000_000), Rate::from_decimal(dec!(0.60)), 360);
    let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();

    assert_eq!(result.termination, Termination::PaidOff);
    assert_eq!(result.payoff_period, Some(360));
    assert_eq!(result.final_balance(), Some(Money::ZERO));
}

#[test]
fn huge_non_amortizing_loan_does_not_overflow_totals() {
    let terms = LoanTerms::with_payment(
        Money::from_decimal(Decimal::from_i128_with_scale(10i128.pow(28), 0)),
        Rate::from_decimal(dec!(0.12)),
        Money::from_decimal(Decimal::from_i128_with_scale(10i128.pow(26), 0)),
    );
    let result = engine().amortize(&terms, &PaymentPolicy::none()).unwrap();

    assert_eq!(result.termination, Termination::NonAmortizing);
    assert_eq!(result.payoff_period, None);
    assert!(result.total_principal().is_some());
}

#[test]
fn oversized_period_length_is_rejected() {
    let err = EngineConfig::from_json(r#"{ "days_per_period": 4000000000 }"#).unwrap_err();
    assert!(matches!(err, AmortizationError::InvalidConfiguration { .. }));

    // a one-period loan projects a sane date under the widest accepted period
    let config = EngineConfig::from_json(r#"{ "days_per_period": 31 }"#).unwrap();
    let engine = AmortizationEngine::with_config(config).unwrap();
    let terms = LoanTerms::with_term(Money::from_major(1_000), Rate::from_percentage(5), 1);
    let result = engine.amortize(&terms, &PaymentPolicy::none()).unwrap();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(result.payoff_from(start).unwrap().year_month(), "2024-02");
}

#[test]
fn invalid_inputs_are_reported_not_simulated() {
    let cases = [
        LoanTerms::with_term(Money::from_major(-100), Rate::from_percentage(5), 12),
        LoanTerms::with_term(Money::from_major(100), Rate::from_decimal(dec!(-0.05)), 12),
        LoanTerms::with_term(Money::from_major(100), Rate::from_percentage(5), 0),
        LoanTerms::with_payment(Money::from_major(100), Rate::from_percentage(5), Money::from_major(-1)),
    ];
    for terms in cases {
        let err: AmortizationError = engine().amortize(&terms, &PaymentPolicy::none()).unwrap_err();
        assert!(err.is_invalid_input(), "{err} should be an input error");
    }
}
