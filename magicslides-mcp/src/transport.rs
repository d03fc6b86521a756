//! Line-delimited JSON-RPC transport
//!
//! Reads one JSON-RPC message per line, handles it to completion and writes
//! the response as a single line. stdout carries protocol frames only; logs
//! go to stderr.

use crate::server::McpServer;
use crate::types::{McpError, McpRequest, McpResponse, RequestId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Serve MCP over the process's stdin/stdout until stdin closes.
pub async fn serve_stdio(server: &McpServer) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(server, stdin, stdout).await
}

/// Serve MCP over any line-oriented reader and writer.
pub async fn serve<R, W>(server: &McpServer, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(response) = dispatch_line(server, line).await else {
            continue;
        };

        let mut frame = serde_json::to_string(&response)?;
        frame.push('\n');
        writer.write_all(frame.as_bytes()).await?;
        writer.flush().await?;
    }

    info!("Input closed, stopping transport");
    Ok(())
}

async fn dispatch_line(server: &McpServer, line: &str) -> Option<McpResponse> {
    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Unparseable message");
            return Some(McpResponse::error(RequestId::Null, McpError::parse_error()));
        }
    };

    match serde_json::from_value::<McpRequest>(value.clone()) {
        Ok(request) => {
            debug!(method = %request.method, "Request received");
            server.handle_request(request).await
        }
        Err(e) => {
            // Responses from the client and other non-requests are not answered.
            if value.get("method").is_none() {
                debug!("Ignoring non-request message");
                return None;
            }
            warn!(error = %e, "Invalid request");
            let id = value
                .get("id")
                .and_then(|id| serde_json::from_value(id.clone()).ok())
                .unwrap_or(RequestId::Null);
            Some(McpResponse::error(id, McpError::invalid_request()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(input: &str) -> Vec<serde_json::Value> {
        let server = McpServer::magicslides();
        let mut output = Vec::new();
        serve(&server, input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_session_over_lines() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );

        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "magicslides-mcp");
        assert_eq!(responses[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_parse_error() {
        let responses = run("{not json\n").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["error"]["code"], McpError::PARSE_ERROR);
        assert!(responses[0]["id"].is_null());
    }

    #[tokio::test]
    async fn test_invalid_request_keeps_id() {
        let responses = run(r#"{"jsonrpc":"2.0","id":"a","method":5}"#).await;
        assert_eq!(responses[0]["error"]["code"], McpError::INVALID_REQUEST);
        assert_eq!(responses[0]["id"], "a");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let responses = run(r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#).await;
        assert_eq!(responses[0]["error"]["code"], McpError::METHOD_NOT_FOUND);
    }
}
