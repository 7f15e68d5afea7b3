use std::path::Path;

use crate::constants::STDIN_INDICATOR;
use crate::error::{Error, Result};

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::Io)?;
    Ok(buf)
}

/// Parses template variables from a JSON document. Blank input means no variables.
pub fn parse_variables(buf: &str) -> Result<serde_json::Value> {
    if buf.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    let value: serde_json::Value = serde_json::from_str(buf)?;
    match value {
        serde_json::Value::Object(_) | serde_json::Value::Null => Ok(value),
        _ => Err(Error::InvalidVariables { kind: "a non-object JSON document" }),
    }
}

/// Reads variables from an inline JSON string, or from `reader` when the
/// argument is the stdin indicator.
pub fn read_variables(arg: &str, reader: impl std::io::Read) -> Result<serde_json::Value> {
    if arg == STDIN_INDICATOR {
        parse_variables(&read_from(reader)?)
    } else {
        parse_variables(arg)
    }
}

pub fn read_variables_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_variables(&content)
}

/// Splits a `key=value` pair. The value is parsed as JSON when possible and
/// kept as a plain string otherwise.
pub fn parse_assignment(pair: &str) -> Result<(String, serde_json::Value)> {
    let (key, raw) = pair.split_once('=').ok_or_else(|| {
        Error::InvalidOption(format!("'{pair}' is not a key=value pair"))
    })?;
    if key.is_empty() {
        return Err(Error::InvalidOption(format!("'{pair}' has an empty key")));
    }
    let value = serde_json::from_str(raw)
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
