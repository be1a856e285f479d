pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod yaml;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Yaml => yaml::print_yaml(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// First field of `obj` holding a non-empty array of objects, e.g. an EMI
/// schedule or a session history.
pub(crate) fn find_row_array(obj: &serde_json::Map<String, Value>) -> Option<(&str, &[Value])> {
    obj.iter().find_map(|(key, val)| match val {
        Value::Array(rows) if matches!(rows.first(), Some(Value::Object(_))) => {
            Some((key.as_str(), rows.as_slice()))
        }
        _ => None,
    })
}
