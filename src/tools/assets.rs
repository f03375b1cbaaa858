//! Asset listing.
//!
//! Tools: fetch-assets

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::convert::to_pretty_text;
use crate::error::{McpError, Result};
use crate::schema;
use crate::session::McpSession;
use crate::tools::{ToolDef, ToolOutput};

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Get all asset tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![ToolDef::new(
        "fetch-assets",
        "Fetch the assets (images and files) of the active Storyblok space, \
         with name, file, size, alt text, folder, tags and more.",
        schema!(object {}),
    )]
}

/// Dispatch an asset tool call.
pub async fn dispatch(
    session: &mut McpSession,
    name: &str,
    _args: Map<String, JsonValue>,
) -> Result<ToolOutput> {
    match name {
        "fetch-assets" => {
            let result = session
                .get_space_json("assets/")
                .await
                .and_then(|data| to_pretty_text(&asset_summaries(&data)));
            Ok(ToolOutput::from_result(name, result))
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}

/// Condensed view of a Storyblok asset.
///
/// Fields absent from the source serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Asset id
    pub id: JsonValue,
    /// Public URL of the file
    pub filename: JsonValue,
    /// Display name
    pub name: JsonValue,
    /// Size in bytes, as reported
    pub size_bytes: JsonValue,
    /// Size in MiB with two decimals
    pub size_mb: Option<String>,
    /// Alt text
    pub alt: JsonValue,
    /// `asset_folder_id`
    pub folder: JsonValue,
    /// `asset_tags`
    pub tags: JsonValue,
    /// Creation timestamp
    pub created_at: JsonValue,
    /// Last update timestamp
    pub updated_at: JsonValue,
    /// Copyright notice
    pub copyright: JsonValue,
    /// MIME type
    pub content_type: JsonValue,
}

impl AssetSummary {
    /// Project one raw asset object.
    pub fn from_asset(asset: &JsonValue) -> Self {
        let field = |key: &str| asset.get(key).cloned().unwrap_or(JsonValue::Null);
        Self {
            id: field("id"),
            filename: field("filename"),
            name: field("name"),
            size_bytes: field("size"),
            size_mb: size_mb(asset.get("size")),
            alt: field("alt"),
            folder: field("asset_folder_id"),
            tags: field("asset_tags"),
            created_at: field("created_at"),
            updated_at: field("updated_at"),
            copyright: field("copyright"),
            content_type: field("content_type"),
        }
    }
}

/// Map the `assets` array of a listing; a missing array yields no summaries.
pub fn asset_summaries(data: &JsonValue) -> Vec<AssetSummary> {
    data.get("assets")
        .and_then(|v| v.as_array())
        .map(|assets| assets.iter().map(AssetSummary::from_asset).collect())
        .unwrap_or_default()
}

// A zero size counts as unknown. Halves round up.
fn size_mb(size: Option<&JsonValue>) -> Option<String> {
    let size = size?;
    if let Some(bytes) = size.as_u64() {
        if bytes == 0 {
            return None;
        }
        let mib = u128::from(BYTES_PER_MIB);
        let hundredths = (u128::from(bytes) * 100 + mib / 2) / mib;
        return Some(format!("{}.{:02}", hundredths / 100, hundredths % 100));
    }
    let bytes = size.as_f64().filter(|b| *b != 0.0)?;
    let hundredths = (bytes * 100.0 / BYTES_PER_MIB as f64).round();
    Some(format!("{:.2}", hundredths / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_mib() {
        let data = json!({"assets": [{"id": 7, "size": 1048576}]});
        let summaries = asset_summaries(&data);
        assert_eq!(summaries[0].size_mb.as_deref(), Some("1.00"));
        assert_eq!(summaries[0].size_bytes, json!(1048576));
    }

    #[test]
    fn test_missing_size_is_null() {
        let data = json!({"assets": [{"id": 7, "filename": "a.png"}]});
        let value = serde_json::to_value(asset_summaries(&data)).unwrap();
        assert_eq!(value[0]["size_mb"], JsonValue::Null);
        assert_eq!(value[0]["size_bytes"], JsonValue::Null);
        assert_eq!(value[0]["filename"], json!("a.png"));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(size_mb(Some(&json!(1572864))).as_deref(), Some("1.50"));
        assert_eq!(size_mb(Some(&json!(12345))).as_deref(), Some("0.01"));
        assert_eq!(size_mb(Some(&json!(0))), None);
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(size_mb(Some(&json!(131072))).as_deref(), Some("0.13"));
        assert_eq!(size_mb(Some(&json!(1179648))).as_deref(), Some("1.13"));
        let asset = AssetSummary::from_asset(&json!({"size": 131072}));
        assert_eq!(asset.size_mb.as_deref(), Some("0.13"));
    }

    #[test]
    fn test_fractional_size() {
        assert_eq!(size_mb(Some(&json!(524288.0))).as_deref(), Some("0.50"));
        assert_eq!(size_mb(Some(&json!(1048576.5))).as_deref(), Some("1.00"));
    }

    #[test]
    fn test_field_renames() {
        let data = json!({"assets": [{
            "id": 1, "asset_folder_id": 9, "asset_tags": ["hero"], "alt": "A cat"
        }]});
        let value = serde_json::to_value(asset_summaries(&data)).unwrap();
        assert_eq!(value[0]["folder"], json!(9));
        assert_eq!(value[0]["tags"], json!(["hero"]));
        assert_eq!(value[0]["alt"], json!("A cat"));
    }

    #[test]
    fn test_no_assets_key() {
        assert!(asset_summaries(&json!({})).is_empty());
    }
}
