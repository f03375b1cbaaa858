//! Liveness check.
//!
//! Tools: ping

use serde_json::{Map, Value as JsonValue};

use crate::convert::get_string_arg;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{ToolDef, ToolOutput};

/// Get the ping tool definition.
pub fn tools() -> Vec<ToolDef> {
    vec![ToolDef::new(
        "ping",
        "Ping the server to check that it is running.",
        schema!(object {
            required: { "message": string }
        }),
    )]
}

/// Dispatch a ping call. Never touches the network.
pub fn dispatch(name: &str, args: Map<String, JsonValue>) -> Result<ToolOutput> {
    match name {
        "ping" => {
            let message = get_string_arg(&args, "message")?;
            Ok(ToolOutput::text(format!(
                "Server was pinged with the following message => {}",
                message
            )))
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
