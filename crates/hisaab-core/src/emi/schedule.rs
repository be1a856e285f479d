use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HisaabError;
use crate::types::Money;
use crate::HisaabResult;

/// One month of the amortization schedule. `installment` is always
/// `principal_component + interest_component`, so the final month may differ
/// from the level EMI by the rounding residue it sweeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub month: u32,
    pub installment: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    pub remaining_balance: Money,
}

/// Schedule rolled up by loan year (months 1-12, 13-24, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

/// Reducing-balance schedule: interest on the opening balance each month, the
/// rest of the installment retires principal. The final month retires
/// whatever balance is left so the loan closes at exactly zero.
pub(crate) fn reducing_balance_schedule(
    principal: Money,
    monthly_rate: Decimal,
    installment: Money,
    tenure_months: u32,
) -> HisaabResult<Vec<MonthRecord>> {
    let mut schedule = Vec::with_capacity(tenure_months as usize);
    let mut balance = principal;

    for month in 1..=tenure_months {
        let interest = balance
            .checked_mul(monthly_rate)
            .ok_or_else(|| HisaabError::overflow(format!("interest for month {month}")))?;

        let mut principal_component = installment - interest;
        if month == tenure_months || principal_component > balance {
            principal_component = balance;
        }
        balance = (balance - principal_component).max(Decimal::ZERO);

        schedule.push(MonthRecord {
            month,
            installment: principal_component + interest,
            principal_component,
            interest_component: interest,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}

/// Flat-rate schedule: equal principal and equal interest every month.
pub(crate) fn flat_rate_schedule(
    principal: Money,
    total_interest: Money,
    tenure_months: u32,
) -> HisaabResult<Vec<MonthRecord>> {
    if tenure_months == 0 {
        return Err(HisaabError::InvalidInput {
            field: "tenure_months".into(),
            reason: "Tenure must be at least 1 month".into(),
        });
    }

    let n = Decimal::from(tenure_months);
    let principal_component = principal / n;
    let interest_component = total_interest / n;

    let mut schedule = Vec::with_capacity(tenure_months as usize);
    let mut balance = principal;

    for month in 1..=tenure_months {
        // Last month absorbs the division residue
        let repaid = if month == tenure_months {
            balance
        } else {
            principal_component.min(balance)
        };
        balance = (balance - repaid).max(Decimal::ZERO);

        schedule.push(MonthRecord {
            month,
            installment: repaid + interest_component,
            principal_component: repaid,
            interest_component,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}

/// Aggregate a monthly schedule into loan years.
pub fn yearly_summary(schedule: &[MonthRecord]) -> Vec<YearSummary> {
    schedule
        .chunks(12)
        .zip(1u32..)
        .map(|(months, year)| YearSummary {
            year,
            principal_paid: months.iter().map(|m| m.principal_component).sum(),
            interest_paid: months.iter().map(|m| m.interest_component).sum(),
            closing_balance: months
                .last()
                .map(|m| m.remaining_balance)
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}
