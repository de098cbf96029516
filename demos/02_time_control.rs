/// time control - deterministic payoff dates with controlled time
use amortization_rs::{Loan, Money, Rate, SafeTimeProvider, SummaryTable, TimeSource};
use chrono::{Duration, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let loan = Loan::builder()
        .amount(Money::from_major(250_000))
        .rate(Rate::from_percentage(6))
        .term_months(360)
        .build()?;

    println!("today: {}", time.now().format("%Y-%m-%d"));
    if let Some(payoff) = loan.payoff_date(&time)? {
        println!("payoff: {} (month {})", payoff.year_month(), payoff.period);
    }

    // a year later the same schedule projects a year further out
    controller.advance(Duration::days(365));
    println!("\ntoday: {}", time.now().format("%Y-%m-%d"));
    let schedule = loan.amortization_schedule()?;
    print!("{}", SummaryTable::new(&schedule, time.now()));

    Ok(())
}
