//! Start-up configuration.
//!
//! Populated from command-line flags and their environment fallbacks in
//! `main.rs`, then handed to [`McpSession::new`](crate::McpSession::new).

use crate::error::{McpError, Result};
use crate::region::Region;

/// Environment variable holding the management token.
pub const TOKEN_ENV: &str = "STORYBLOK_MANAGEMENT_TOKEN";
/// Environment variable holding the initial space id.
pub const SPACE_ID_ENV: &str = "STORYBLOK_SPACE_ID";
/// Environment variable holding an initial forced region.
pub const REGION_ENV: &str = "STORYBLOK_REGION";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Management token sent in the `Authorization` header.
    pub token: String,
    /// Space queried until `set-space-id` is called.
    pub space_id: Option<String>,
    /// Region override applied until `set-region` is called.
    pub region: Option<Region>,
}

impl Config {
    /// Create a configuration with only a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            space_id: None,
            region: None,
        }
    }

    /// Set the initial space id.
    pub fn with_space_id(mut self, space_id: impl Into<String>) -> Self {
        self.space_id = Some(space_id.into());
        self
    }

    /// Set the initial forced region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Reject configurations that cannot authenticate.
    ///
    /// An empty space id is treated as absent.
    pub fn validate(mut self) -> Result<Self> {
        if self.token.trim().is_empty() {
            return Err(McpError::InvalidArg {
                name: "token".to_string(),
                reason: format!("management token is empty (set {})", TOKEN_ENV),
            });
        }
        if self.space_id.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.space_id = None;
        }
        Ok(self)
    }
}
