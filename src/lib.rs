//! # storyblok-mcp
//!
//! MCP (Model Context Protocol) server for the Storyblok Management API.
//!
//! This crate exposes a handful of read-only Storyblok endpoints as tools for
//! AI agents. It implements the MCP protocol over stdin/stdout using JSON-RPC 2.0.
//!
//! ## Features
//!
//! - **8 tools**: ping, stories, components, assets, story by id, content
//!   search, and switching the active space or region
//! - **Region routing**: requests go to the EU, US, AP, CA or CN API; the
//!   region is detected from the space id or forced with `set-region`
//! - **Error results**: HTTP and parse failures come back as tool results
//!   flagged `isError`, never as protocol failures
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "storyblok": {
//!       "command": "/path/to/storyblok-mcp",
//!       "env": {
//!         "STORYBLOK_MANAGEMENT_TOKEN": "...",
//!         "STORYBLOK_SPACE_ID": "123456"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use storyblok_mcp::{Config, HttpClient, McpServer, McpSession};
//!
//! # async fn run() -> storyblok_mcp::Result<()> {
//! let config = Config::new("management-token").with_space_id("123456");
//! let session = McpSession::new(Box::new(HttpClient::new()?), config);
//! let mut server = McpServer::new(session);
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod error;
mod region;
mod server;
mod session;
mod tools;

pub use client::{HttpClient, StoryblokApi};
pub use config::{Config, REGION_ENV, SPACE_ID_ENV, TOKEN_ENV};
pub use error::{McpError, Result};
pub use region::{detect_region, resolve_base_url, Region};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use session::{McpSession, RequestContext};
pub use tools::assets::AssetSummary;
pub use tools::{ToolDef, ToolOutput, ToolRegistry};
