//! Story and component tools.
//!
//! Tools: fetch-stories, fetch-components, fetch-story-by-id, search-content

use serde_json::{Map, Value as JsonValue};

use crate::convert::{get_string_arg, to_pretty_text};
use crate::error::{McpError, Result};
use crate::schema;
use crate::session::McpSession;
use crate::tools::{ToolDef, ToolOutput};

/// Get all content tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "fetch-stories",
            "Fetch the stories of the active Storyblok space.",
            schema!(object {}),
        ),
        ToolDef::new(
            "fetch-components",
            "Fetch the component schemas of the active Storyblok space.",
            schema!(object {}),
        ),
        ToolDef::new(
            "fetch-story-by-id",
            "Fetch the complete content of one story, including all of its fields.",
            schema!(object {
                required: { "storyId": string }
            }),
        ),
        ToolDef::new(
            "search-content",
            "Search every story of the active space for a term (case-insensitive). \
             Returns the matching stories in full.",
            schema!(object {
                required: { "query": string }
            }),
        ),
    ]
}

/// Dispatch a content tool call.
pub async fn dispatch(
    session: &mut McpSession,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolOutput> {
    let result = match name {
        "fetch-stories" => fetch_pretty(session, "stories/").await,
        "fetch-components" => fetch_pretty(session, "components/").await,

        "fetch-story-by-id" => {
            let story_id = get_string_arg(&args, "storyId")?;
            fetch_pretty(session, &format!("stories/{}", story_id)).await
        }

        "search-content" => {
            let query = get_string_arg(&args, "query")?;
            search_content(session, &query).await
        }

        _ => return Err(McpError::UnknownTool(name.to_string())),
    };

    Ok(ToolOutput::from_result(name, result))
}

async fn fetch_pretty(session: &McpSession, suffix: &str) -> Result<String> {
    let data = session.get_space_json(suffix).await?;
    to_pretty_text(&data)
}

async fn search_content(session: &McpSession, query: &str) -> Result<String> {
    let data = session.get_space_json("stories/").await?;
    let matches = search_stories(&data, query);
    if matches.is_empty() {
        Ok(format!("No se encontraron resultados para: \"{}\"", query))
    } else {
        to_pretty_text(&matches)
    }
}

/// Stories from a `stories` listing whose serialized JSON contains `query`,
/// ignoring case.
pub fn search_stories<'a>(data: &'a JsonValue, query: &str) -> Vec<&'a JsonValue> {
    let needle = query.to_lowercase();
    stories(data)
        .iter()
        .filter(|story| story.to_string().to_lowercase().contains(&needle))
        .collect()
}

fn stories(data: &JsonValue) -> &[JsonValue] {
    data.get("stories")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
