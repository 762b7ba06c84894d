//! MCP Server implementation and lifecycle management.
//!
//! The main server handler implements the MCP protocol by delegating to
//! the prompt service. Prompts are defined in
//! `domains/prompts/definitions/` and registered in
//! `domains/prompts/registry.rs`; adding a prompt does not require
//! modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::prompts::PromptService;
use crate::logging::{Level, Logger};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    logger: Arc<Logger>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let prompt_service = Arc::new(PromptService::new(config.prompts.clone()));
        let logger = Arc::new(Logger::new(config.server.name.clone(), Level::Info, None));

        Self {
            config,
            prompt_service,
            logger,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone().into(),
                version: self.config.server.version.clone().into(),
                ..Default::default()
            },
            instructions: Some(
                "Role-based prompt templates: developer (design, review), UI designer, \
                 English teacher, and article writer prompts."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            ..Default::default()
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.logger.info("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.logger
            .info(format!("Getting prompt: {}", request.name));

        // Convert serde_json::Map to HashMap<String, String>
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });

        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reports_configured_identity() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "tobe-mcp");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_info_enables_prompts_capability() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.tools.is_none());
        assert!(info.instructions.is_some());
    }
}
