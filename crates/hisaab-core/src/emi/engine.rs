use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::schedule::{flat_rate_schedule, reducing_balance_schedule, MonthRecord};
use crate::error::HisaabError;
use crate::time_value::annuity_installment;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::HisaabResult;

/// Typical input ranges offered by the loan screen; values outside them
/// are computed but flagged.
const TYPICAL_PRINCIPAL_MIN: Decimal = dec!(1000);
const TYPICAL_PRINCIPAL_MAX: Decimal = dec!(10000000);
const TYPICAL_RATE_MIN: Decimal = dec!(1);
const TYPICAL_RATE_MAX: Decimal = dec!(100);
const TYPICAL_TENURE_MAX: u32 = 360;

/// Hard ceiling on tenure (100 years); longer loans are rejected.
const MAX_TENURE_MONTHS: u32 = 1200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Interest model for the loan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmiMethod {
    /// Interest each month on the outstanding balance.
    #[default]
    ReducingBalance,
    /// Interest once on the original principal, spread evenly.
    Flat,
}

/// Loan parameters as entered on the EMI screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    /// Annual rate in percent (10 = 10% p.a.).
    pub annual_rate_percent: Percent,
    pub tenure_months: u32,
    #[serde(default)]
    pub method: EmiMethod,
}

/// Installment, totals and the month-by-month schedule. Values are not
/// rounded; display rounding belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    pub monthly_installment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub schedule: Vec<MonthRecord>,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Compute the EMI, totals and amortization schedule for a loan.
pub fn calculate_emi(input: &EmiInput) -> HisaabResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if input.principal <= Decimal::ZERO {
        return Err(HisaabError::InvalidInput {
            field: "principal".into(),
            reason: "Loan amount must be positive".into(),
        });
    }
    if input.annual_rate_percent <= Decimal::ZERO {
        return Err(HisaabError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate must be positive".into(),
        });
    }
    if input.tenure_months == 0 {
        return Err(HisaabError::InvalidInput {
            field: "tenure_months".into(),
            reason: "Tenure must be at least 1 month".into(),
        });
    }
    if input.tenure_months > MAX_TENURE_MONTHS {
        return Err(HisaabError::InvalidInput {
            field: "tenure_months".into(),
            reason: format!("Tenure cannot exceed {MAX_TENURE_MONTHS} months"),
        });
    }

    if input.principal < TYPICAL_PRINCIPAL_MIN || input.principal > TYPICAL_PRINCIPAL_MAX {
        warnings.push(format!(
            "Loan amount {} is outside the typical range 1,000 to 1,00,00,000",
            input.principal
        ));
    }
    if input.annual_rate_percent < TYPICAL_RATE_MIN || input.annual_rate_percent > TYPICAL_RATE_MAX {
        warnings.push(format!(
            "Interest rate {}% is outside the typical range 1% to 100% p.a.",
            input.annual_rate_percent
        ));
    }
    if input.tenure_months > TYPICAL_TENURE_MAX {
        warnings.push(format!(
            "Tenure of {} months exceeds the typical maximum of {TYPICAL_TENURE_MAX}",
            input.tenure_months
        ));
    }

    let n = Decimal::from(input.tenure_months);

    let (installment, schedule, methodology) = match input.method {
        EmiMethod::ReducingBalance => {
            let monthly_rate = input.annual_rate_percent / dec!(1200);
            let installment = annuity_installment(monthly_rate, input.tenure_months, input.principal)?;
            let schedule = reducing_balance_schedule(
                input.principal,
                monthly_rate,
                installment,
                input.tenure_months,
            )?;
            (
                installment,
                schedule,
                "Reducing-balance EMI: P·r·(1+r)^n / ((1+r)^n − 1), r = annual rate / 1200",
            )
        }
        EmiMethod::Flat => {
            let flat_interest = input
                .principal
                .checked_mul(input.annual_rate_percent / dec!(100))
                .and_then(|v| v.checked_mul(n / dec!(12)))
                .ok_or_else(|| HisaabError::overflow("flat-rate interest"))?;
            let installment = input
                .principal
                .checked_add(flat_interest)
                .ok_or_else(|| HisaabError::overflow("flat-rate installment"))?
                / n;
            let schedule =
                flat_rate_schedule(input.principal, flat_interest, input.tenure_months)?;
            (
                installment,
                schedule,
                "Flat-rate EMI: interest = P × rate × years, spread evenly over the tenure",
            )
        }
    };

    let total_payment = installment
        .checked_mul(n)
        .ok_or_else(|| HisaabError::overflow("total payment"))?;
    let total_interest = total_payment - input.principal;

    debug!(
        method = ?input.method,
        %installment,
        %total_interest,
        months = schedule.len(),
        "computed EMI"
    );

    let output = EmiOutput {
        monthly_installment: installment,
        total_interest,
        total_payment,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed, output))
}

/// EMI for display. Invalid parameters (non-positive principal or rate, zero
/// tenure) or numeric overflow yield `None` so the caller can hide the result.
pub fn compute_emi(
    principal: Money,
    annual_rate_percent: Percent,
    tenure_months: u32,
    method: EmiMethod,
) -> Option<EmiOutput> {
    let input = EmiInput {
        principal,
        annual_rate_percent,
        tenure_months,
        method,
    };
    match calculate_emi(&input) {
        Ok(output) => Some(output.result),
        Err(e) => {
            warn!(error = %e, "EMI not computed");
            None
        }
    }
}

/// Interest as a percentage of the total amount repaid.
pub fn interest_share(output: &EmiOutput) -> Percent {
    if output.total_payment.is_zero() {
        return Decimal::ZERO;
    }
    output.total_interest / output.total_payment * dec!(100)
}
