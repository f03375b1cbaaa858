//! Argument extraction and response formatting helpers.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::{McpError, Result};
use crate::region::Region;

/// Helper to get a required string argument from JSON arguments.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    match args.get(name) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "Expected a string".to_string(),
        }),
        None => Err(McpError::MissingArg(name.to_string())),
    }
}

/// Helper to get a required region argument.
pub fn get_region_arg(args: &Map<String, JsonValue>, name: &str) -> Result<Region> {
    get_string_arg(args, name)?.parse()
}

/// Serialize `value` as JSON indented with two spaces.
pub fn to_pretty_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::Unexpected(e.to_string()))
}
