use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::anki::AnkiTransport;
use crate::error::Result;
use crate::mcp::server::ToolHandler;
use crate::mcp::types::{CallToolParams, CallToolResult, ContentBlock, ListToolsResult, Tool};

use super::ToolRegistry;

/// Bridges MCP tool calls onto AnkiConnect actions: validate the arguments,
/// build the one action request, invoke the transport, relay the raw reply.
/// The reply envelope is never inspected; a remote-reported error goes back
/// as ordinary successful tool output for the caller to interpret.
pub struct AnkiToolHandler {
    registry: ToolRegistry,
    transport: Arc<dyn AnkiTransport>,
}

impl AnkiToolHandler {
    pub fn new(registry: ToolRegistry, transport: Arc<dyn AnkiTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

#[async_trait]
impl ToolHandler for AnkiToolHandler {
    fn list_tools(&self) -> ListToolsResult {
        let tools = self
            .registry
            .iter()
            .map(|def| Tool {
                name: def.name.to_string(),
                description: Some(def.description.to_string()),
                input_schema: (def.input_schema)(),
            })
            .collect();

        ListToolsResult {
            tools,
            next_cursor: None,
        }
    }

    async fn call_tool(&self, params: CallToolParams) -> Result<CallToolResult> {
        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let request = self.registry.build_request(&params.name, &arguments)?;
        let response = self.transport.invoke(&request).await?;

        Ok(CallToolResult {
            content: vec![ContentBlock::Text {
                text: serde_json::to_string(&response)?,
            }],
            is_error: None,
        })
    }
}
