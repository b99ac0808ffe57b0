use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One evaluation pair. Extra JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fixture {
    pub input: String,
    pub expected: String,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("format error in {path}: {message}")]
    Format { path: String, message: String },
    #[error("schema error in {path}, entry {index}: {message}")]
    Schema {
        path: String,
        index: usize,
        message: String,
    },
}

pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>, InputError> {
    let origin = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|e| InputError::Format {
        path: origin.clone(),
        message: e.to_string(),
    })?;
    parse_fixtures(&raw, &origin)
}

pub fn parse_fixtures(raw: &str, origin: &str) -> Result<Vec<Fixture>, InputError> {
    let doc: Value = serde_json::from_str(raw).map_err(|e| InputError::Format {
        path: origin.to_string(),
        message: e.to_string(),
    })?;

    let entries = match doc {
        Value::Array(entries) => entries,
        other => {
            return Err(InputError::Format {
                path: origin.to_string(),
                message: format!("expected a top-level array, found {}", json_kind(&other)),
            });
        }
    };

    let mut fixtures = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let fixture =
            serde_json::from_value::<Fixture>(entry).map_err(|e| InputError::Schema {
                path: origin.to_string(),
                index,
                message: e.to_string(),
            })?;
        fixtures.push(fixture);
    }
    Ok(fixtures)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
