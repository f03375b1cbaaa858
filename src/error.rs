//! Error types for the MCP server.
//!
//! Separates faults raised inside a tool handler (HTTP, parse, unexpected),
//! which are reported back as error-tagged tool results, from faults at the
//! RPC boundary, which become JSON-RPC errors.

use serde::{Deserialize, Serialize};

/// MCP server errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum McpError {
    /// The Storyblok API answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    Http {
        /// Numeric status code
        status: u16,
        /// Status text (e.g. "Not Found")
        reason: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Parse(String),

    /// Any other fault raised while serving a tool call.
    #[error("{0}")]
    Unexpected(String),

    /// Unknown tool requested.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArg(String),

    /// Invalid argument value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// JSON-RPC protocol error.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for McpError {
    fn from(err: std::io::Error) -> Self {
        McpError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        McpError::Protocol(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for McpError {
    fn from(err: reqwest::Error) -> Self {
        McpError::Unexpected(err.to_string())
    }
}

/// JSON-RPC error codes.
pub mod rpc_codes {
    /// Parse error - Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl McpError {
    /// Convert to JSON-RPC error code.
    pub fn rpc_code(&self) -> i32 {
        match self {
            McpError::UnknownTool(_) => rpc_codes::METHOD_NOT_FOUND,
            McpError::MissingArg(_) | McpError::InvalidArg { .. } => rpc_codes::INVALID_PARAMS,
            McpError::Protocol(_) => rpc_codes::INVALID_REQUEST,
            _ => rpc_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status_text() {
        let err = McpError::Http {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
        assert_eq!(err.rpc_code(), rpc_codes::INTERNAL_ERROR);
    }

    #[test]
    fn test_validation_codes() {
        assert_eq!(
            McpError::UnknownTool("x".into()).rpc_code(),
            rpc_codes::METHOD_NOT_FOUND
        );
        let invalid = McpError::InvalidArg {
            name: "region".into(),
            reason: "bad".into(),
        };
        assert_eq!(invalid.rpc_code(), rpc_codes::INVALID_PARAMS);
    }
}
