//! STDIO transport: MCP frames on stdin/stdout, logs on stderr.

use rmcp::ServiceExt;
use tracing::{info, instrument};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serves one MCP session over the process's standard streams.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve MCP over stdin/stdout until the client disconnects.
    #[instrument(skip_all, fields(server = %server.name()))]
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "Product API server ready on stdin/stdout ({} tools)",
            server.tools().len()
        );

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init("stdio", e.to_string()))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::session("stdio", e.to_string()))?;

        info!("STDIO session closed: {:?}", reason);
        Ok(())
    }
}
