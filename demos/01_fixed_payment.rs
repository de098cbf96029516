/// fixed payment - payment given directly instead of a term, including one that never pays off
use amortization_rs::{
    format_currency, init_tracing, AmortizationEngine, LoanTerms, Money, PaymentPolicy, Rate,
    Termination,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    println!("=== fixed payment example ===\n");

    let engine = AmortizationEngine::new();

    // $10,000 at 7.5% paying $1,000 a month
    let terms = LoanTerms::with_payment(
        Money::from_major(10_000),
        Rate::from_bps(750),
        Money::from_major(1_000),
    );
    let result = engine.amortize(&terms, &PaymentPolicy::none())?;
    println!("paid off after {} months", result.len());
    if let Some(last) = result.entries.last() {
        println!("final payment: {}", format_currency(last.total_payment));
    }

    // $100,000 at 10% paying $500 a month: interest alone is $833.33
    let terms = LoanTerms::with_payment(
        Money::from_major(100_000),
        Rate::from_percentage(10),
        Money::from_major(500),
    );
    let result = engine.amortize(&terms, &PaymentPolicy::none())?;
    match result.termination {
        Termination::NonAmortizing => println!(
            "\n$500/month never pays off; balance after {} months: {}",
            result.len(),
            format_currency(result.final_balance().unwrap_or(Money::ZERO))
        ),
        other => println!("\nunexpected termination: {:?}", other),
    }

    Ok(())
}
