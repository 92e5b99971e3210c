use rmcp::model::{Tool, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::McpError;
use crate::graphql::{Document, Executable, Selection, Variable, operation_data};
use crate::language::LanguageCode;
use crate::outcome::{FailureKind, Outcome, RETRIEVAL_FAILURE};
use crate::schema_from_type;
use crate::tools::invalid_input;
use crate::transport::TransportError;

pub const PRODUCT_DELETE_TRANSLATION_TOOL_NAME: &str = "product_delete_translation";

#[derive(Clone)]
pub struct ProductDeleteTranslation {
    pub tool: Tool,
}

/// Input for the product_delete_translation tool.
#[derive(JsonSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Product client identifier
    product_identifier: String,

    /// Language to delete. When omitted, translations into all languages
    /// are removed.
    #[serde(default)]
    language: Option<LanguageCode>,
}

impl ProductDeleteTranslation {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                PRODUCT_DELETE_TRANSLATION_TOOL_NAME,
                "Delete a product translation. If no language is given, \
                 translations into all languages are removed.",
                schema_from_type!(Input),
            )
            .annotate(ToolAnnotations::new().read_only(false)),
        }
    }
}

impl Default for ProductDeleteTranslation {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for ProductDeleteTranslation {
    fn document(&self, input: Value) -> Result<Document, McpError> {
        let input = serde_json::from_value::<Input>(input).map_err(|_| invalid_input())?;

        // The language variable is always bound; a null value tells the
        // remote to delete every language.
        Ok(
            Document::mutation("ProductTranslationDelete", "productTranslationDelete")
                .variable(Variable::typed(
                    "language",
                    json!(input.language),
                    "LanguageEnum",
                ))
                .variable(Variable::new(
                    "productIdentifier",
                    json!(input.product_identifier),
                ))
                .selection(vec![
                    Selection::Field("status"),
                    Selection::Object(
                        "errors",
                        vec![Selection::Field("code"), Selection::Field("message")],
                    ),
                ]),
        )
    }

    fn interpret(&self, response: Result<Value, TransportError>) -> Outcome {
        let body = match response {
            Ok(body) => body,
            Err(error) => return Outcome::from(error),
        };

        let Some(action) = operation_data(&body, "productTranslationDelete") else {
            return Outcome::failure(FailureKind::NotFound, RETRIEVAL_FAILURE);
        };

        // Success is gated on status alone; the errors list is passed
        // through in data but does not flip the outcome.
        let status = action.get("status").and_then(Value::as_str).unwrap_or("");
        if status.is_empty() {
            return Outcome::failure(FailureKind::NotFound, RETRIEVAL_FAILURE);
        }

        Outcome::success(
            format!("Delete translation status: {status}"),
            action.clone(),
        )
    }
}
