use crate::model::Amount;
use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::str::FromStr;

/// Read a file to a `String`.
pub(crate) fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file at {}", path.display()))
}

/// Deserialize a JSON file into type `T`.
pub(crate) fn deserialize<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = read_to_string(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file at {}", path.display()))
}

/// Parses an amount for use as a clap `value_parser`.
pub(crate) fn parse_amount(s: &str) -> std::result::Result<Amount, String> {
    Amount::from_str(s).map_err(|e| format!("'{s}' is not a valid amount: {e}"))
}
