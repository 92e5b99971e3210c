//! The MCP server exposing the Loco tools.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorCode, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::errors::McpError;
use crate::graphql::Executable;
use crate::tools::{
    GLOSSARY_ITEM_UPSERT_TOOL_NAME, GlossaryItemUpsert, PRODUCT_DELETE_TRANSLATION_TOOL_NAME,
    PRODUCT_LIST_TOOL_NAME, ProductDeleteTranslation, ProductList,
};
use crate::transport::Transport;

#[derive(Clone)]
pub struct LocoServer {
    transport: Arc<Transport>,
    product_list: ProductList,
    product_delete_translation: ProductDeleteTranslation,
    glossary_item_upsert: GlossaryItemUpsert,
}

impl LocoServer {
    pub fn new(transport: Transport) -> Self {
        Self {
            transport: Arc::new(transport),
            product_list: ProductList::new(),
            product_delete_translation: ProductDeleteTranslation::new(),
            glossary_item_upsert: GlossaryItemUpsert::new(),
        }
    }
}

impl ServerHandler for LocoServer {
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = %request.name, "Tool call");
        let input = Value::from(request.arguments.clone());
        match request.name.as_ref() {
            PRODUCT_LIST_TOOL_NAME => self.product_list.execute(&self.transport, input).await,
            PRODUCT_DELETE_TRANSLATION_TOOL_NAME => {
                self.product_delete_translation
                    .execute(&self.transport, input)
                    .await
            }
            GLOSSARY_ITEM_UPSERT_TOOL_NAME => {
                self.glossary_item_upsert
                    .execute(&self.transport, input)
                    .await
            }
            _ => Err(tool_not_found(&request.name)),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: vec![
                self.product_list.tool.clone(),
                self.product_delete_translation.tool.clone(),
                self.glossary_item_upsert.tool.clone(),
            ],
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "Loco MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn tool_not_found(name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Tool {name} not found"),
        None,
    )
}
