//! HTTP access to the Storyblok Management API.
//!
//! Handlers talk to the API through the [`StoryblokApi`] trait so the
//! transport can be swapped out in tests.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{McpError, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("storyblok-mcp/", env!("CARGO_PKG_VERSION"));

/// A source of JSON documents from the management API.
#[async_trait]
pub trait StoryblokApi: Send + Sync {
    /// GET `url` with `token` in the `Authorization` header and parse the body.
    ///
    /// Non-success statuses yield [`McpError::Http`], bodies that are not JSON
    /// yield [`McpError::Parse`], anything else [`McpError::Unexpected`].
    async fn get_json(&self, url: &str, token: &str) -> Result<JsonValue>;
}

/// Production client backed by `reqwest`.
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Build a client with the default settings.
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl StoryblokApi for HttpClient {
    async fn get_json(&self, url: &str, token: &str) -> Result<JsonValue> {
        debug!(url, "GET");
        let resp = self
            .inner
            .get(url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(McpError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let body = resp.text().await?;
        parse_body(&body)
    }
}

/// Parse a response body, mapping failures to [`McpError::Parse`].
pub fn parse_body(body: &str) -> Result<JsonValue> {
    serde_json::from_str(body).map_err(|e| McpError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_parse_body() {
        let value = parse_body(r#"{"stories": []}"#).unwrap();
        assert!(value["stories"].is_array());
        assert!(matches!(parse_body("<html>"), Err(McpError::Parse(_))));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unexpected() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpClient::new().unwrap();
        let url = format!("http://127.0.0.1:{}/v1/spaces/1/stories/", port);
        let err = client.get_json(&url, "tok").await.unwrap_err();
        assert!(matches!(err, McpError::Unexpected(_)));
    }
}
