//! MagicSlides MCP server binary
//!
//! Serves MCP over stdio. Configure with `MAGICSLIDES_ACCESS_ID` and the
//! other variables documented on [`ServiceConfig::from_env`].

use magicslides_mcp::clients::ServiceConfig;
use magicslides_mcp::tools::all_tools;
use magicslides_mcp::transport::serve_stdio;
use magicslides_mcp::McpServer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout is for MCP protocol frames
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("MagicSlides MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::from_env();
    config.validate()?;
    if config.default_access_id.is_none() {
        warn!("MAGICSLIDES_ACCESS_ID not set; every call must supply 'accessId'");
    }

    let server = McpServer::magicslides();
    server.register_tools(all_tools(&config)?).await;

    info!("MCP server running, waiting for requests...");
    serve_stdio(&server).await?;

    info!("MCP server shutting down");
    Ok(())
}
