//! MCP session management.
//!
//! Holds the API client, the management token and the active space/region,
//! similar to a CLI's session state. Handlers never read these fields
//! directly; they work from a [`RequestContext`] snapshot.

use serde_json::Value as JsonValue;

use crate::client::StoryblokApi;
use crate::config::Config;
use crate::error::{McpError, Result};
use crate::region::{effective_region, Region};

/// MCP session state.
pub struct McpSession {
    /// Client used for every API call
    api: Box<dyn StoryblokApi>,
    /// Management token
    token: String,
    /// Active space
    space_id: Option<String>,
    /// Region override set via `set-region` or configuration
    forced_region: Option<Region>,
}

/// Everything a single handler invocation needs, captured up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Base URL of the region in effect
    pub base_url: &'static str,
    /// Active space, if any
    pub space_id: Option<String>,
    /// Management token
    pub token: String,
}

impl RequestContext {
    /// URL of `suffix` under the active space, e.g. `stories/`.
    pub fn space_url(&self, suffix: &str) -> Result<String> {
        let space_id = self.space_id.as_deref().ok_or_else(|| {
            McpError::Unexpected("no active space id; call set-space-id first".to_string())
        })?;
        Ok(format!("{}/spaces/{}/{}", self.base_url, space_id, suffix))
    }
}

impl McpSession {
    /// Create a new session.
    pub fn new(api: Box<dyn StoryblokApi>, config: Config) -> Self {
        Self {
            api,
            token: config.token,
            space_id: config.space_id,
            forced_region: config.region,
        }
    }

    /// Get the active space id.
    pub fn space_id(&self) -> Option<&str> {
        self.space_id.as_deref()
    }

    /// Get the forced region, if one was set.
    pub fn forced_region(&self) -> Option<Region> {
        self.forced_region
    }

    /// Region every request currently goes to.
    pub fn region(&self) -> Region {
        effective_region(self.forced_region, self.space_id.as_deref())
    }

    /// Switch to a different space. The forced region, if any, is kept.
    pub fn set_space_id(&mut self, space_id: &str) -> String {
        self.space_id = Some(space_id.to_string());
        let region = self.region();
        let how = if self.forced_region.is_some() {
            "forced"
        } else {
            "detected"
        };
        format!(
            "Space ID updated to: {} (region: {}, {})",
            space_id, region, how
        )
    }

    /// Force all further requests to `region`.
    pub fn set_region(&mut self, region: Region) -> String {
        self.forced_region = Some(region);
        format!("Region set to: {} ({})", region, region.base_url())
    }

    /// Snapshot of the state a handler works from.
    pub fn context(&self) -> RequestContext {
        RequestContext {
            base_url: self.region().base_url(),
            space_id: self.space_id.clone(),
            token: self.token.clone(),
        }
    }

    /// GET `suffix` under the active space.
    pub async fn get_space_json(&self, suffix: &str) -> Result<JsonValue> {
        let ctx = self.context();
        let url = ctx.space_url(suffix)?;
        self.api.get_json(&url, &ctx.token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NoApi;

    #[async_trait]
    impl StoryblokApi for NoApi {
        async fn get_json(&self, _url: &str, _token: &str) -> Result<JsonValue> {
            Err(McpError::Unexpected("offline".to_string()))
        }
    }

    fn session(config: Config) -> McpSession {
        McpSession::new(Box::new(NoApi), config)
    }

    #[test]
    fn test_set_space_id_reports_detected_region() {
        let mut s = session(Config::new("tok"));
        let msg = s.set_space_id("1005");
        assert_eq!(s.region(), Region::Us);
        assert!(msg.contains("1005"));
        assert!(msg.contains("us"));
        assert!(msg.contains("detected"));
    }

    #[test]
    fn test_forced_region_survives_space_change() {
        let mut s = session(Config::new("tok").with_space_id("1001"));
        s.set_region(Region::Ca);
        let msg = s.set_space_id("1002");
        assert_eq!(s.region(), Region::Ca);
        assert!(msg.contains("ca"));
        assert!(msg.contains("forced"));
        s.set_region(Region::Eu);
        assert_eq!(s.region(), Region::Eu);
    }

    #[test]
    fn test_context_snapshot() {
        let s = session(Config::new("tok").with_space_id("1001"));
        let ctx = s.context();
        assert_eq!(ctx.base_url, "https://api-us.storyblok.com/v1");
        assert_eq!(
            ctx.space_url("stories/").unwrap(),
            "https://api-us.storyblok.com/v1/spaces/1001/stories/"
        );
    }

    #[test]
    fn test_space_url_without_space() {
        let s = session(Config::new("tok"));
        assert!(matches!(
            s.context().space_url("stories/"),
            Err(McpError::Unexpected(_))
        ));
    }
}
