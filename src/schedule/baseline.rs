use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{AmortizationError, Result};

/// level monthly payment that amortizes `principal` over exactly `months` periods
///
/// Uses `P * r * (1 + r)^n / ((1 + r)^n - 1)`, the overflow-friendly form of
/// `P * r / (1 - (1 + r)^-n)`. A zero rate degenerates to `P / n`. The
/// result is not rounded: at high rates over long terms even sub-cent error
/// compounds by `(1 + r)^n` and would leave a balance at the end of the term.
pub fn level_payment(principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Err(AmortizationError::InvalidTerm { months });
    }

    let n = Decimal::from(months);
    let r = annual_rate.monthly_rate().as_decimal();

    if r.is_zero() {
        return principal
            .checked_div(n)
            .ok_or_else(|| overflow("principal / term"));
    }

    let compound = growth_factor(r, months).ok_or_else(|| overflow("(1 + r)^n"))?;
    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        // rate so small that (1 + r)^n rounds back to one
        return principal
            .checked_div(n)
            .ok_or_else(|| overflow("principal / term"));
    }

    let payment = principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|x| x.checked_mul(compound))
        .and_then(|x| x.checked_div(denominator))
        .ok_or_else(|| overflow("annuity payment"))?;

    Ok(Money::from_decimal(payment))
}

/// (1 + r)^n by repeated squaring, `None` on overflow
fn growth_factor(r: Decimal, n: u32) -> Option<Decimal> {
    let mut base = Decimal::ONE.checked_add(r)?;
    let mut exp = n;
    let mut acc = Decimal::ONE;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.checked_mul(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(acc)
}

fn overflow(what: &str) -> AmortizationError {
    AmortizationError::CalculationError {
        message: format!("decimal overflow computing {what}"),
    }
}
