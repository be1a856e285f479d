pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Structured input for a command: the `--input` file when given, otherwise
/// JSON piped on stdin, otherwise `None` so the caller falls back to flags.
pub fn load<T: DeserializeOwned>(path: Option<&str>) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json(path)?));
    }
    match stdin::read_stdin()? {
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
        None => Ok(None),
    }
}
