/// json view - serialize a loan and its schedule summary
use amortization_rs::{EngineConfig, AmortizationEngine, Loan, Money, Rate, ScheduleView};
use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loan = Loan::builder()
        .name("Student Loan")
        .amount(Money::from_major(25_000))
        .rate(Rate::from_bps(499))
        .monthly_payment(Money::from_major(300))
        .additional_payment(Money::from_major(50))
        .build()?;

    println!("{}", loan.to_json_pretty());

    // shorter period cap loaded from json
    let config = EngineConfig::from_json(r#"{ "max_periods": 120 }"#)?;
    let engine = AmortizationEngine::with_config(config)?;
    let schedule = loan.amortization_schedule_with(&engine)?;

    let view = ScheduleView::from_result(&schedule, Utc::now());
    println!("{}", serde_json::to_string_pretty(&view.summary)?);

    Ok(())
}
