/// An error in server startup
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Missing environment variable: {0}")]
    EnvironmentVariable(String),

    #[error("Invalid endpoint URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// An MCP tool error
pub type McpError = rmcp::model::ErrorData;
