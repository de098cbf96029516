/// quick start - minimal example to get started
use amortization_rs::{Loan, Money, Rate, Decimal, ScheduleTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $100,000 at 3.5% APR over 36 months
    let loan = Loan::builder()
        .name("Car Loan")
        .amount(Money::from_major(100_000))
        .rate(Rate::from_apr(Decimal::new(35, 1)))
        .term_months(36)
        .build()?;

    let schedule = loan.amortization_schedule()?;
    print!("{}", ScheduleTable::new(&schedule));

    Ok(())
}
