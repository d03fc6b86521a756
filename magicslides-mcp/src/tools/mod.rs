//! MagicSlides MCP tools
//!
//! - `create_ppt_from_text`: generate a presentation from text or a YouTube URL
//! - `get_youtube_transcript`: fetch a YouTube transcript

pub mod presentation;
pub mod transcript;

pub use presentation::CreatePptFromTextTool;
pub use transcript::GetYoutubeTranscriptTool;

use crate::clients::{ConfigError, ServiceConfig};
use crate::orchestrator::PresentationOrchestrator;
use crate::server::Tool;
use std::sync::Arc;

/// Get all MagicSlides tools, wired to the services in `config`.
///
/// # Example
///
/// ```rust,no_run
/// use magicslides_mcp::clients::ServiceConfig;
/// use magicslides_mcp::tools::all_tools;
///
/// let tools = all_tools(&ServiceConfig::from_env()).unwrap();
/// println!("Available tools: {}", tools.len());
/// ```
pub fn all_tools(config: &ServiceConfig) -> Result<Vec<Arc<dyn Tool>>, ConfigError> {
    let orchestrator = PresentationOrchestrator::from_config(config)?;
    Ok(tools_for(orchestrator, config.default_access_id.clone()))
}

/// Build the tools around an existing orchestrator.
pub fn tools_for(
    orchestrator: PresentationOrchestrator,
    default_access_id: Option<String>,
) -> Vec<Arc<dyn Tool>> {
    let transcripts = orchestrator.transcripts().clone();
    vec![
        Arc::new(CreatePptFromTextTool::new(orchestrator, default_access_id)),
        Arc::new(GetYoutubeTranscriptTool::new(transcripts)),
    ]
}
