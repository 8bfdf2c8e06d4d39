//! Subcommand implementations.

use std::{fs, io::Read, path::Path};

use confluence::doc::Value;
use serde::de::DeserializeOwned;
use tracing::debug;

pub mod diff;
pub mod merge;
pub mod patch;

/// Read and parse a JSON file, or stdin when `path` is "-".
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        raw
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?
    };
    debug!(path = %path.display(), bytes = raw.len(), "read input");
    serde_json::from_str(&raw).map_err(|e| format!("Failed to parse {}: {e}", path.display()).into())
}

/// Read a document.
pub fn read_document(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let json: serde_json::Value = read_json(path)?;
    Ok(Value::from(json))
}
