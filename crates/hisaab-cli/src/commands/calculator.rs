use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use hisaab_core::expression;
use hisaab_core::formatting::{format_expression_for_display, format_grouped_digits};
use hisaab_core::percentage::resolver::{
    resolve_percentage_operation, split_percentage_context, try_resolve_percentage_operation,
};
use hisaab_core::session::CalculatorSession;

/// Arguments for expression evaluation
#[derive(Args)]
pub struct EvalArgs {
    /// Expression, e.g. "2+3×4" or "1200*18/100"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Fail on a malformed expression instead of reporting 0
    #[arg(long)]
    pub strict: bool,
}

pub fn run_eval(args: EvalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = if args.strict {
        expression::try_evaluate(&args.expression)?
    } else {
        expression::evaluate(&args.expression)
    };

    Ok(json!({
        "result": {
            "expression": format_expression_for_display(&args.expression),
            "value": result.to_string(),
            "grouped": format_grouped_digits(result),
        }
    }))
}

/// Arguments for a percentage-key press
#[derive(Args)]
pub struct PercentArgs {
    /// Running expression before the % key, e.g. "1000+"
    #[arg(long, allow_hyphen_values = true)]
    pub expression: String,

    /// Percentage value (10 = 10%)
    #[arg(long, allow_hyphen_values = true)]
    pub percentage: Decimal,

    /// Fail when the expression cannot be resolved instead of reporting 0
    #[arg(long)]
    pub strict: bool,
}

pub fn run_percent(args: PercentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = if args.strict {
        try_resolve_percentage_operation(&args.expression, args.percentage)?
    } else {
        resolve_percentage_operation(&args.expression, args.percentage)
    };
    let context = split_percentage_context(&args.expression);

    Ok(json!({
        "result": {
            "expression": format_expression_for_display(&args.expression),
            "percentage": args.percentage.to_string(),
            "operator": context.as_ref().and_then(|c| c.operator).map(|op| op.symbol().to_string()),
            "base_expression": context.as_ref().map(|c| c.base_expression.clone()),
            "value": result.to_string(),
            "grouped": format_grouped_digits(result),
        }
    }))
}

/// Arguments for replaying keypad presses
#[derive(Args)]
pub struct KeysArgs {
    /// Key presses: digits, '.', + - × ÷ (or * /), '%', '=', 'C' clear, '<' backspace
    #[arg(allow_hyphen_values = true)]
    pub keys: String,
}

pub fn run_keys(args: KeysArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut session = CalculatorSession::new();
    session.apply_keys(&args.keys)?;

    let preview: Decimal = session.preview();
    Ok(json!({
        "result": {
            "display": session.display(),
            "expression": session.expression(),
            "preview": preview.to_string(),
        },
        "history": serde_json::to_value(session.history())?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_run_eval_lenient_and_strict() {
        let value = run_eval(EvalArgs {
            expression: "1200*18/100".into(),
            strict: false,
        })
        .unwrap();
        assert_eq!(value["result"]["value"], "216");
        assert_eq!(value["result"]["expression"], "1200 × 18 ÷ 100");

        let lenient = run_eval(EvalArgs {
            expression: "2+×".into(),
            strict: false,
        })
        .unwrap();
        assert_eq!(lenient["result"]["value"], "0");

        assert!(run_eval(EvalArgs {
            expression: "(2".into(),
            strict: true,
        })
        .is_err());
    }

    #[test]
    fn test_run_percent_reports_context() {
        let value = run_percent(PercentArgs {
            expression: "250000+".into(),
            percentage: dec!(18),
            strict: true,
        })
        .unwrap();
        assert_eq!(value["result"]["value"], "295000");
        assert_eq!(value["result"]["grouped"], "2,95,000");
        assert_eq!(value["result"]["operator"], "+");
    }

    #[test]
    fn test_run_keys_returns_history() {
        let value = run_keys(KeysArgs {
            keys: "12×3=".into(),
        })
        .unwrap();
        assert_eq!(value["result"]["display"], "36");
        assert_eq!(value["history"][0]["expression"], "12 × 3");
    }
}
