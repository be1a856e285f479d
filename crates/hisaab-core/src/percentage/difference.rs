use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::HUNDRED;
use crate::error::HisaabError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::HisaabResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Direction of change from the "from" amount to the "to" amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
    NoChange,
}

impl Direction {
    fn of(percentage: Percent) -> Self {
        if percentage > Decimal::ZERO {
            Direction::Increase
        } else if percentage < Decimal::ZERO {
            Direction::Decrease
        } else {
            Direction::NoChange
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Increase => Direction::Decrease,
            Direction::Decrease => Direction::Increase,
            Direction::NoChange => Direction::NoChange,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferenceInput {
    pub from_amount: Money,
    pub to_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceOutcome {
    pub from_amount: Money,
    pub to_amount: Money,
    /// Signed change relative to `from_amount`, in percent.
    pub percentage: Percent,
    pub absolute_change: Money,
    pub direction: Direction,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// `(to − from) / from × 100`. Zero when `from` is zero.
pub fn percentage_difference(from_amount: Money, to_amount: Money) -> Percent {
    if from_amount.is_zero() {
        return Decimal::ZERO;
    }
    to_amount
        .checked_sub(from_amount)
        .and_then(|change| change.checked_div(from_amount))
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

fn build_outcome(from_amount: Money, to_amount: Money) -> HisaabResult<DifferenceOutcome> {
    let absolute_change = to_amount
        .checked_sub(from_amount)
        .ok_or_else(|| HisaabError::overflow("percentage difference"))?;
    let percentage = percentage_difference(from_amount, to_amount);
    Ok(DifferenceOutcome {
        from_amount,
        to_amount,
        percentage,
        absolute_change,
        direction: Direction::of(percentage),
    })
}

/// Percentage change with the standard output envelope. A zero `from_amount`
/// is reported as 0% with a warning.
pub fn calculate_percentage_difference(
    input: &DifferenceInput,
) -> HisaabResult<ComputationOutput<DifferenceOutcome>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.from_amount.is_zero() {
        warnings.push("from_amount is zero; percentage change is undefined and reported as 0".into());
    }

    let outcome = build_outcome(input.from_amount, input.to_amount)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Percentage change relative to the from amount",
        input,
        warnings,
        elapsed,
        outcome,
    ))
}

// ---------------------------------------------------------------------------
// Reverse-percentage screen state
// ---------------------------------------------------------------------------

/// Holds the two amounts of a reverse-percentage lookup and the last computed
/// outcome, so a swap can reuse it.
#[derive(Debug, Clone, Default)]
pub struct ReversePercentageTracker {
    from_amount: Option<Money>,
    to_amount: Option<Money>,
    outcome: Option<DifferenceOutcome>,
    inputs_changed: bool,
}

impl ReversePercentageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from(&mut self, amount: Option<Money>) {
        self.from_amount = amount;
        self.inputs_changed = true;
    }

    pub fn set_to(&mut self, amount: Option<Money>) {
        self.to_amount = amount;
        self.inputs_changed = true;
    }

    pub fn outcome(&self) -> Option<&DifferenceOutcome> {
        self.outcome.as_ref()
    }

    /// Compute from the current amounts. Missing amounts or a zero "from"
    /// amount clear the outcome.
    pub fn calculate(&mut self) -> Option<&DifferenceOutcome> {
        self.inputs_changed = false;
        self.outcome = match (self.from_amount, self.to_amount) {
            (Some(from), Some(to)) if !from.is_zero() => build_outcome(from, to).ok(),
            _ => None,
        };
        self.outcome.as_ref()
    }

    /// Exchange the amounts. An outcome computed from the current inputs is
    /// negated in place (direction flipped) rather than recomputed; if the
    /// inputs changed since, the outcome is recomputed from the swapped pair.
    pub fn swap(&mut self) -> Option<&DifferenceOutcome> {
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);

        if self.inputs_changed {
            return self.calculate();
        }

        if let Some(outcome) = self.outcome.as_mut() {
            std::mem::swap(&mut outcome.from_amount, &mut outcome.to_amount);
            outcome.percentage = -outcome.percentage;
            outcome.absolute_change = -outcome.absolute_change;
            outcome.direction = outcome.direction.reversed();
        }
        self.outcome.as_ref()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
