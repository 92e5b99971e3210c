//! The normalized result returned by every tool.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::Value;

use crate::transport::TransportError;

/// Fixed message used when the remote returns a body the operation cannot
/// use, kept verbatim for callers that still match on it
pub const RETRIEVAL_FAILURE: &str = "Failed to retrieve data from loco";

/// Why an invocation failed, so callers can branch without parsing the
/// message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never produced a usable 2xx JSON body
    Transport,
    /// The response parsed but the operation's data was absent or null
    NotFound,
    /// The remote processed the request and reported application errors
    RemoteRejected,
}

/// Uniform success/error envelope. A success never carries a failure kind;
/// a failure always carries a non-empty message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
}

impl Outcome {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            kind: None,
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            kind: Some(kind),
        }
    }

    /// Attach the raw remote payload to a failure, for callers that need the
    /// reported error codes
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn into_call_tool_result(self) -> CallToolResult {
        let is_error = !self.success;
        CallToolResult {
            content: vec![
                Content::json(&self)
                    .unwrap_or_else(|_| Content::text(self.message.clone())),
            ],
            is_error: Some(is_error),
        }
    }
}

impl From<TransportError> for Outcome {
    fn from(error: TransportError) -> Self {
        Self::failure(FailureKind::Transport, error.to_string())
    }
}
