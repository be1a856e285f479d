use rust_decimal::Decimal;

use crate::error::HisaabError;
use crate::types::Money;
use crate::HisaabResult;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Decimal, n: u32) -> HisaabResult<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| HisaabError::overflow(format!("compounding over {n} periods")))?;
    }
    Ok(result)
}

/// Level installment that fully amortises `principal` over `nper` periods at
/// periodic `rate`: P·r·(1+r)^n / ((1+r)^n − 1). Returned as a positive amount.
pub fn annuity_installment(rate: Decimal, nper: u32, principal: Money) -> HisaabResult<Money> {
    if nper == 0 {
        return Err(HisaabError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound(rate, nper)?;
    let annuity_factor = factor - Decimal::ONE;

    if annuity_factor.is_zero() {
        return Err(HisaabError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(annuity_factor))
        .ok_or_else(|| HisaabError::overflow("annuity installment"))
}
