/// extra payments - how much an additional monthly payment saves
use amortization_rs::{format_currency, init_tracing, AmortizationEngine, LoanTerms, Money, PaymentPolicy, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    println!("=== extra payments example ===\n");

    let engine = AmortizationEngine::new();
    let terms = LoanTerms::with_term(Money::from_major(300_000), Rate::from_bps(650), 360);

    for extra in [0, 100, 250, 500, 1_000] {
        let impact = engine.compare_additional(&terms, &PaymentPolicy::new(Money::from_major(extra)))?;
        println!(
            "extra {:>10}: payoff month {:>3}, interest {:>14}, saved {:>14} and {} months",
            format_currency(Money::from_major(extra)),
            impact.accelerated.payoff_period.unwrap_or(0),
            format_currency(impact.accelerated.total_interest),
            format_currency(impact.interest_saved()),
            impact.periods_saved().unwrap_or(0),
        );
    }

    Ok(())
}
