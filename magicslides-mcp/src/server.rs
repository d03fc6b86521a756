//! MCP server implementation
//!
//! This module provides the MCP server that registers tools, lists them and
//! dispatches `tools/call` requests. Tool failures are reported in-band as
//! error text; the only JSON-RPC fault a call can produce is an unknown tool
//! name.

use crate::types::*;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};

/// MCP server error types.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

/// Result type for MCP server operations.
pub type McpServerResult<T> = Result<T, McpServerError>;

/// Trait for tool implementations.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with given arguments.
    async fn execute(
        &self,
        args: serde_json::Value,
        context: &ToolContext,
    ) -> McpServerResult<ToolResult>;
}

/// Context for tool execution.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Request correlation ID
    pub correlation_id: Option<String>,
}

impl ToolContext {
    /// Create an empty context.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a context correlated with a JSON-RPC request.
    pub fn for_request(id: &RequestId) -> Self {
        Self {
            correlation_id: Some(id.to_string()),
        }
    }
}

/// MCP server.
///
/// Holds the tool registry. Tools are listed in registration order.
pub struct McpServer {
    /// Server info
    info: ServerInfo,

    /// Server capabilities
    capabilities: ServerCapabilities,

    /// Registered tools
    tools: Arc<RwLock<Vec<Arc<dyn Tool>>>>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolCapabilities::default()),
            },
            tools: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create with the MagicSlides server identity.
    pub fn magicslides() -> Self {
        Self::new("magicslides-mcp", env!("CARGO_PKG_VERSION"))
    }

    /// Register a tool, replacing any tool with the same name.
    pub async fn register_tool(&self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name;
        let mut tools = self.tools.write().await;

        if let Some(existing) = tools.iter_mut().find(|t| t.definition().name == name) {
            warn!(tool = %name, "Replacing registered tool");
            *existing = tool;
        } else {
            tools.push(tool);
        }
    }

    /// Register multiple tools.
    pub async fn register_tools(&self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register_tool(tool).await;
        }
    }

    /// Get all tool definitions.
    pub async fn list_tools(&self) -> Vec<ToolDefinition> {
        let tools = self.tools.read().await;
        tools.iter().map(|t| t.definition()).collect()
    }

    /// Execute a tool.
    ///
    /// Only an unknown name is an `Err`; every other failure comes back as an
    /// error [`ToolResult`].
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        context: &ToolContext,
    ) -> McpServerResult<ToolResult> {
        let tool = {
            let tools = self.tools.read().await;
            tools
                .iter()
                .find(|t| t.definition().name == name)
                .cloned()
                .ok_or_else(|| McpServerError::ToolNotFound(name.to_string()))?
        };

        match tool.execute(arguments, context).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!(tool = %name, error = %e, "Tool execution failed");
                Ok(ToolResult::error(e))
            }
        }
    }

    /// Handle an MCP request. Notifications yield `None`.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        if request.is_notification() {
            debug!("Notification received");
            return None;
        }
        let id = request.id.unwrap_or(RequestId::Null);

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "ping" => McpResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(id).await,
            "tools/call" => self.handle_tools_call(id, request.params).await,
            _ => McpResponse::error(id, McpError::method_not_found(&request.method)),
        };
        Some(response)
    }

    fn handle_initialize(&self, id: RequestId) -> McpResponse {
        McpResponse::success(
            id,
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": self.capabilities,
                "serverInfo": self.info
            }),
        )
    }

    async fn handle_tools_list(&self, id: RequestId) -> McpResponse {
        let tools = self.list_tools().await;
        McpResponse::success(id, serde_json::json!({ "tools": tools }))
    }

    async fn handle_tools_call(
        &self,
        id: RequestId,
        params: Option<serde_json::Value>,
    ) -> McpResponse {
        let params = match params {
            Some(p) => p,
            None => return McpResponse::error(id, McpError::invalid_params("Missing params")),
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(c) => c,
            Err(e) => return McpResponse::error(id, McpError::invalid_params(e.to_string())),
        };

        let context = ToolContext::for_request(&id);

        match self.call_tool(&call.name, call.arguments, &context).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(value) => McpResponse::success(id, value),
                Err(e) => McpResponse::error(id, McpError::internal_error(e.to_string())),
            },
            Err(McpServerError::ToolNotFound(name)) => {
                McpResponse::error(id, McpError::tool_not_found(&name))
            }
            Err(e) => McpResponse::error(id, McpError::internal_error(e.to_string())),
        }
    }
}
