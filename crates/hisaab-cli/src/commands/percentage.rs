use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use hisaab_core::percentage::difference::{self, DifferenceInput};

use crate::input;

/// Arguments for percentage change between two amounts
#[derive(Args)]
pub struct PctDiffArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Original amount
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<Decimal>,

    /// New amount
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<Decimal>,
}

pub fn run_pct_diff(args: PctDiffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let diff_input: DifferenceInput = if let Some(loaded) = input::load(args.input.as_deref())? {
        loaded
    } else {
        DifferenceInput {
            from_amount: args.from.ok_or("--from is required (or provide --input)")?,
            to_amount: args.to.ok_or("--to is required (or provide --input)")?,
        }
    };

    let result = difference::calculate_percentage_difference(&diff_input)?;
    Ok(serde_json::to_value(result)?)
}
