use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use hisaab_core::formatting::{format_grouped_digits, format_rupees, number_to_words};

/// Arguments for number formatting
#[derive(Args)]
pub struct FormatArgs {
    /// Number to format
    #[arg(allow_hyphen_values = true)]
    pub value: Decimal,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "result": {
            "value": args.value.to_string(),
            "grouped": format_grouped_digits(args.value),
            "rupees": format_rupees(args.value),
            "words": number_to_words(args.value),
        }
    }))
}
