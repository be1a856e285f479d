use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use hisaab_core::emi::{self, EmiInput, EmiMethod};
use hisaab_core::formatting::{format_rupees, number_to_words};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Reducing,
    Flat,
}

impl From<MethodArg> for EmiMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Reducing => EmiMethod::ReducingBalance,
            MethodArg::Flat => EmiMethod::Flat,
        }
    }
}

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (10 = 10% p.a.)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Interest model
    #[arg(long, value_enum, default_value = "reducing")]
    pub method: MethodArg,

    /// Add a year-by-year rollup of the schedule
    #[arg(long)]
    pub yearly: bool,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(loaded) = input::load(args.input.as_deref())? {
        loaded
    } else {
        EmiInput {
            principal: args.principal.ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure_months: args.tenure.ok_or("--tenure is required (or provide --input)")?,
            method: args.method.into(),
        }
    };

    let output = emi::calculate_emi(&emi_input)?;
    let summary = json!({
        "monthly_installment": format_rupees(output.result.monthly_installment),
        "total_interest": format_rupees(output.result.total_interest),
        "total_payment": format_rupees(output.result.total_payment),
        "principal_in_words": number_to_words(emi_input.principal),
        "interest_share_pct": emi::interest_share(&output.result).round_dp(2).to_string(),
    });
    let yearly = args
        .yearly
        .then(|| emi::yearly_summary(&output.result.schedule));

    let mut value = serde_json::to_value(output)?;
    if let Value::Object(ref mut map) = value {
        map.insert("display".into(), summary);
        if let Some(years) = yearly {
            map.insert("yearly_summary".into(), serde_json::to_value(years)?);
        }
    }
    Ok(value)
}
