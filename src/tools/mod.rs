//! Tool registry and category definitions.
//!
//! Provides the infrastructure for registering and dispatching MCP tools.

pub mod assets;
pub mod content;
pub mod ping;
pub mod space;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::error::{McpError, Result};
use crate::session::McpSession;

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "fetch-stories")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl ToolDef {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Outcome of a tool call: a single text block, possibly flagged as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Text content returned to the caller
    pub text: String,
    /// Whether the call failed
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful output.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Failed output. The message is prefixed with `Error: `.
    pub fn error(err: &McpError) -> Self {
        Self {
            text: format!("Error: {}", err),
            is_error: true,
        }
    }

    /// Fold the result of a handler's work into an output, logging failures.
    pub fn from_result(tool: &str, result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::text(text),
            Err(err) => {
                warn!(tool, error = %err, "tool call failed");
                Self::error(&err)
            }
        }
    }

    /// MCP `tools/call` result body.
    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "content": [{
                "type": "text",
                "text": self.text
            }],
            "isError": self.is_error
        })
    }
}

/// Registry of all available tools.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    /// Create a new registry with all tools registered.
    pub fn new() -> Self {
        let mut tools = Vec::new();

        tools.extend(ping::tools());
        tools.extend(content::tools());
        tools.extend(assets::tools());
        tools.extend(space::tools());

        Self { tools }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// `Err` is reserved for calls rejected at the boundary (unknown tool,
    /// bad arguments). Failures while doing the work come back as an
    /// error-flagged [`ToolOutput`].
    pub async fn dispatch(
        &self,
        session: &mut McpSession,
        name: &str,
        args: Map<String, JsonValue>,
    ) -> Result<ToolOutput> {
        match name {
            "ping" => ping::dispatch(name, args),
            "fetch-stories" | "fetch-components" | "fetch-story-by-id" | "search-content" => {
                content::dispatch(session, name, args).await
            }
            "fetch-assets" => assets::dispatch(session, name, args).await,
            "set-space-id" | "set-region" => space::dispatch(session, name, args),
            _ => Err(McpError::UnknownTool(name.to_string())),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper macro for creating JSON Schema for tool input parameters.
#[macro_export]
macro_rules! schema {
    // Object with only required properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Empty object (no parameters)
    (object {}) => {{
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }};

    // Type mappings
    (@type string) => { serde_json::json!({"type": "string"}) };
    (@type region) => {
        serde_json::json!({
            "type": "string",
            "enum": $crate::region::Region::ALL.iter().map(|r| r.as_str()).collect::<Vec<_>>()
        })
    };
}
