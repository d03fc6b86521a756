//! YouTube transcript tool

use crate::clients::TranscriptClient;
use crate::error::SlidesError;
use crate::server::{McpServerError, McpServerResult, Tool, ToolContext};
use crate::types::{ToolDefinition, ToolResult};
use crate::youtube::is_youtube_url;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument};

/// Tool to fetch the transcript of a YouTube video.
pub struct GetYoutubeTranscriptTool {
    client: TranscriptClient,
}

impl GetYoutubeTranscriptTool {
    /// Create the tool.
    pub fn new(client: TranscriptClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranscriptParams {
    #[serde(default)]
    yt_url: Option<String>,
}

#[async_trait]
impl Tool for GetYoutubeTranscriptTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_youtube_transcript",
            "Fetch transcript from a YouTube video URL",
        )
        .with_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "ytUrl": {
                    "type": "string",
                    "description": "YouTube video URL"
                }
            },
            "required": ["ytUrl"]
        }))
    }

    #[instrument(
        skip_all,
        fields(tool = "get_youtube_transcript", request = ?context.correlation_id)
    )]
    async fn execute(
        &self,
        args: serde_json::Value,
        context: &ToolContext,
    ) -> McpServerResult<ToolResult> {
        let params: TranscriptParams = if args.is_null() {
            TranscriptParams::default()
        } else {
            serde_json::from_value(args).map_err(|e| McpServerError::InvalidParams(e.to_string()))?
        };

        let Some(yt_url) = params.yt_url.filter(|u| !u.trim().is_empty()) else {
            return Ok(ToolResult::error(SlidesError::invalid_input(
                "Missing YouTube URL parameter.",
            )));
        };

        if !is_youtube_url(&yt_url) {
            return Ok(ToolResult::error(SlidesError::invalid_input(format!(
                "Invalid YouTube URL: {}",
                yt_url
            ))));
        }

        info!(url = %yt_url, "Fetching transcript");
        match self.client.fetch_transcript(yt_url.trim()).await {
            Ok(transcript) => Ok(ToolResult::text(format!(
                "📝 YouTube Transcript:\n\n{}",
                transcript
            ))),
            Err(e) => {
                error!("Failed to fetch transcript: {}", e);
                Ok(ToolResult::error(e))
            }
        }
    }
}
