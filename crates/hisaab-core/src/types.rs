use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages as entered on the keypad (10 = 10%). Never as fractions.
pub type Percent = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Convert a float coming from a UI or FFI boundary. NaN, infinities and
/// values outside the Decimal range yield `None`.
pub fn money_from_f64(value: f64) -> Option<Money> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_from_f64_rejects_non_finite() {
        assert_eq!(money_from_f64(f64::NAN), None);
        assert_eq!(money_from_f64(f64::INFINITY), None);
        assert_eq!(money_from_f64(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_money_from_f64_finite() {
        assert_eq!(money_from_f64(1234.5), Some(dec!(1234.5)));
        assert_eq!(money_from_f64(-5000.0), Some(dec!(-5000)));
    }

    #[test]
    fn test_with_metadata_envelope() {
        let out = with_metadata("Test", &serde_json::json!({"a": 1}), vec![], 7, dec!(1));
        assert_eq!(out.methodology, "Test");
        assert_eq!(out.metadata.computation_time_us, 7);
        assert_eq!(out.assumptions["a"], 1);
    }
}
