//! Presentation generation tool
//!
//! `create_ppt_from_text` turns free text or a YouTube URL into an editable
//! MagicSlides presentation through [`PresentationOrchestrator`].

use crate::error::SlidesError;
use crate::orchestrator::PresentationOrchestrator;
use crate::server::{McpServerError, McpServerResult, Tool, ToolContext};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument};

/// Tool to create a presentation from text.
///
/// The access ID comes from the call arguments when given, else from the
/// default configured at startup.
pub struct CreatePptFromTextTool {
    orchestrator: PresentationOrchestrator,
    default_access_id: Option<String>,
}

impl CreatePptFromTextTool {
    /// Create the tool.
    pub fn new(orchestrator: PresentationOrchestrator, default_access_id: Option<String>) -> Self {
        Self {
            orchestrator,
            default_access_id,
        }
    }

    fn resolve_access_id(&self, explicit: Option<String>) -> Result<String, SlidesError> {
        explicit
            .filter(|id| !id.trim().is_empty())
            .or_else(|| self.default_access_id.clone())
            .ok_or_else(|| {
                SlidesError::invalid_input(
                    "Missing MagicSlides access ID. Provide 'accessId' or set MAGICSLIDES_ACCESS_ID env var.",
                )
            })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePptParams {
    #[serde(default)]
    user_text: Option<String>,
    #[serde(default)]
    access_id: Option<String>,
}

#[async_trait]
impl Tool for CreatePptFromTextTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "create_ppt_from_text",
            "Generate a PowerPoint from text or YouTube URL",
        )
        .with_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "userText": {
                    "type": "string",
                    "description": "The content for the presentation."
                },
                "accessId": {
                    "type": "string",
                    "description": "Optional MagicSlides access ID override. Defaults to MAGICSLIDES_ACCESS_ID env var."
                }
            },
            "required": ["userText"]
        }))
    }

    #[instrument(
        skip_all,
        fields(tool = "create_ppt_from_text", request = ?context.correlation_id)
    )]
    async fn execute(
        &self,
        args: serde_json::Value,
        context: &ToolContext,
    ) -> McpServerResult<ToolResult> {
        let params: CreatePptParams = if args.is_null() {
            CreatePptParams::default()
        } else {
            serde_json::from_value(args).map_err(|e| McpServerError::InvalidParams(e.to_string()))?
        };

        let Some(user_text) = params.user_text.filter(|t| !t.trim().is_empty()) else {
            return Ok(ToolResult::error(SlidesError::invalid_input(
                "Missing userText parameter.",
            )));
        };

        let access_id = match self.resolve_access_id(params.access_id) {
            Ok(id) => id,
            Err(e) => return Ok(ToolResult::error(e)),
        };

        match self.orchestrator.create_from_text(&user_text, &access_id).await {
            Ok(result) => {
                info!(presentation_id = %result.presentation_id, "Presentation tool succeeded");
                Ok(ToolResult::text(format!(
                    "🎉 SUCCESS! Your presentation has been created!\n\nPRESENTATION URL: {}\n\nCopy and paste this URL into your browser to open your presentation in the MagicSlides editor.",
                    result.presentation_url
                )))
            }
            Err(e) => {
                error!("Failed to create presentation: {}", e);
                Ok(ToolResult::error(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ServiceConfig;

    fn tool(default_access_id: Option<&str>) -> CreatePptFromTextTool {
        let orchestrator =
            PresentationOrchestrator::from_config(&ServiceConfig::default()).unwrap();
        CreatePptFromTextTool::new(orchestrator, default_access_id.map(str::to_string))
    }

    #[test]
    fn test_definition() {
        let def = tool(None).definition();
        assert_eq!(def.name, "create_ppt_from_text");
        assert_eq!(def.input_schema["required"], serde_json::json!(["userText"]));
    }

    #[test]
    fn test_access_id_precedence() {
        let with_default = tool(Some("env-id"));
        assert_eq!(
            with_default.resolve_access_id(Some("arg-id".to_string())).unwrap(),
            "arg-id"
        );
        assert_eq!(with_default.resolve_access_id(None).unwrap(), "env-id");
        assert_eq!(
            with_default.resolve_access_id(Some("  ".to_string())).unwrap(),
            "env-id"
        );

        let err = tool(None).resolve_access_id(None).unwrap_err();
        assert!(err.to_string().contains("MAGICSLIDES_ACCESS_ID"));
    }

    #[tokio::test]
    async fn test_missing_user_text_is_in_band() {
        let result = tool(Some("env-id"))
            .execute(serde_json::json!({}), &ToolContext::empty())
            .await
            .unwrap();
        assert!(result.is_error);
        assert!(result.text_content().contains("Missing userText parameter."));
    }

    #[tokio::test]
    async fn test_missing_access_id_is_in_band() {
        let result = tool(None)
            .execute(serde_json::json!({"userText": "Volcanoes"}), &ToolContext::empty())
            .await
            .unwrap();
        assert!(result.is_error);
        assert!(result.text_content().contains("Missing MagicSlides access ID."));
    }

    #[tokio::test]
    async fn test_wrong_argument_type_is_invalid_params() {
        let result = tool(None)
            .execute(serde_json::json!({"userText": 42}), &ToolContext::empty())
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
