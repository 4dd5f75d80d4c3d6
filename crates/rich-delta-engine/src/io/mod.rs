use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::parsing::delta::Operation;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid delta JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Not a delta: expected an array of operations or an object with an `ops` array")]
    NotADelta,
}

/// Parse delta operations from JSON.
///
/// Accepts a bare array of operations or a Quill document `{"ops": [...]}`.
pub fn parse_operations_json(json: &str) -> Result<Vec<Operation>, IoError> {
    let value: Value = serde_json::from_str(json)?;
    let ops = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("ops") {
            Some(ops @ Value::Array(_)) => ops,
            _ => return Err(IoError::NotADelta),
        },
        _ => return Err(IoError::NotADelta),
    };
    Ok(serde_json::from_value(ops)?)
}

/// Read a delta JSON file and parse its operations
pub fn read_operations(path: &Path) -> Result<Vec<Operation>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_operations_json(&content)
}
