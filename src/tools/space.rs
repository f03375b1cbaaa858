//! Active space and region selection.
//!
//! Tools: set-space-id, set-region

use serde_json::{Map, Value as JsonValue};
use tracing::info;

use crate::convert::{get_region_arg, get_string_arg};
use crate::error::{McpError, Result};
use crate::schema;
use crate::session::McpSession;
use crate::tools::{ToolDef, ToolOutput};

/// Get all space tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "set-space-id",
            "Set the Storyblok space that subsequent tools query. \
             The region is detected from the id unless one was forced with set-region.",
            schema!(object {
                required: { "spaceId": string }
            }),
        ),
        ToolDef::new(
            "set-region",
            "Force the Storyblok API region (eu, us, ap, ca, cn), overriding detection.",
            schema!(object {
                required: { "region": region }
            }),
        ),
    ]
}

/// Dispatch a space tool call.
pub fn dispatch(
    session: &mut McpSession,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolOutput> {
    match name {
        "set-space-id" => {
            let space_id = get_string_arg(&args, "spaceId")?;
            let message = session.set_space_id(&space_id);
            info!(space_id = %space_id, region = %session.region(), "active space changed");
            Ok(ToolOutput::text(message))
        }

        "set-region" => {
            let region = get_region_arg(&args, "region")?;
            let message = session.set_region(region);
            info!(region = %region, "region forced");
            Ok(ToolOutput::text(message))
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
