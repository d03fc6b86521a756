//! # MagicSlides MCP
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! MagicSlides presentation generation and YouTube transcript retrieval as
//! tools for AI assistants.
//!
//! ## Overview
//!
//! The magicslides-mcp crate handles:
//! - **Tools**: `create_ppt_from_text` and `get_youtube_transcript`
//! - **JSON-RPC**: MCP protocol over line-delimited stdio
//! - **Orchestration**: account check, transcript, parameter enrichment, generation
//! - **Clients**: HTTP clients for the MagicSlides, transcript and enrichment services
//!
//! ## MCP Protocol
//!
//! Supported methods:
//! - `initialize`: Initialize the MCP session
//! - `ping`: Liveness check
//! - `tools/list`: List available tools
//! - `tools/call`: Execute a tool
//!
//! Tool failures are returned in-band as text starting with `❌ Error:`.
//! Calling an unknown tool is the only call that yields a JSON-RPC error
//! (`-32601`).
//!
//! ## Parameter Resolution
//!
//! Generation parameters are resolved per field with this precedence:
//! explicit request in the text (see [`params::parse_user_parameters`]),
//! then the enrichment service's suggestion, then the default. If the
//! enrichment service is unavailable the request still proceeds with
//! defaults.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use magicslides_mcp::{clients::ServiceConfig, tools::all_tools, McpServer, McpRequest};
//!
//! async fn handle(json: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::from_env();
//!     let server = McpServer::magicslides();
//!     server.register_tools(all_tools(&config)?).await;
//!
//!     let request: McpRequest = serde_json::from_str(json)?;
//!     if let Some(response) = server.handle_request(request).await {
//!         println!("{}", serde_json::to_string(&response)?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod clients;
mod decode;
pub mod enrich;
pub mod error;
pub mod orchestrator;
pub mod params;
pub mod server;
pub mod tools;
pub mod transport;
pub mod types;
pub mod youtube;

// Re-export main types
pub use error::{SlidesError, SlidesResult};
pub use orchestrator::{GenerationResult, PresentationOrchestrator};
pub use params::{GenerationParameters, Model, Template};
pub use server::{McpServer, McpServerError, McpServerResult, Tool, ToolContext};
pub use types::{
    ContentBlock, McpError, McpRequest, McpResponse, RequestId, ServerCapabilities, ServerInfo,
    ToolCall, ToolCapabilities, ToolDefinition, ToolResult,
};

// Re-export service clients
pub use clients::{
    EnrichmentClient, MagicSlidesClient, ServiceConfig, ServiceEndpoint, TranscriptClient,
};
