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

pub const GLOSSARY_ITEM_UPSERT_TOOL_NAME: &str = "glossary_item_create_or_update";

#[derive(Clone)]
pub struct GlossaryItemUpsert {
    pub tool: Tool,
}

/// Input for the glossary_item_create_or_update tool.
#[derive(JsonSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Source language of the glossary term
    language_from: LanguageCode,

    /// Term in the source language
    text_source: String,

    /// Target language of the glossary term
    language_to: LanguageCode,

    /// Term in the target language
    text_target: String,
}

impl GlossaryItemUpsert {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                GLOSSARY_ITEM_UPSERT_TOOL_NAME,
                "Create a glossary entry, or update it if a term already \
                 exists for the language pair.",
                schema_from_type!(Input),
            )
            .annotate(ToolAnnotations::new().read_only(false)),
        }
    }
}

impl Default for GlossaryItemUpsert {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for GlossaryItemUpsert {
    fn document(&self, input: Value) -> Result<Document, McpError> {
        let input = serde_json::from_value::<Input>(input).map_err(|_| invalid_input())?;

        Ok(
            Document::mutation("GlossaryItemCreateOrUpdate", "glossaryItemCreateOrUpdate")
                .variable(
                    Variable::typed(
                        "input",
                        json!([{
                            "languageFrom": input.language_from,
                            "textSource": input.text_source,
                            "languageTo": input.language_to,
                            "textTarget": input.text_target,
                        }]),
                        "[GlossaryItemCreateOrUpdateInput!]",
                    )
                    .required(),
                )
                .selection(vec![
                    Selection::Object("glossaries", vec![Selection::Field("glossaryId")]),
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

        let Some(result) = operation_data(&body, "glossaryItemCreateOrUpdate") else {
            return Outcome::failure(FailureKind::NotFound, RETRIEVAL_FAILURE);
        };

        match result.get("errors").and_then(Value::as_array) {
            // The reported codes stay in data; the message is the sentinel
            Some(errors) if !errors.is_empty() => {
                Outcome::failure(FailureKind::RemoteRejected, RETRIEVAL_FAILURE)
                    .with_data(result.clone())
            }
            _ => {
                let message = serde_json::to_string(result)
                    .unwrap_or_else(|_| result.to_string());
                Outcome::success(message, result.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> GlossaryItemUpsert {
        GlossaryItemUpsert::new()
    }

    fn input() -> Value {
        json!({
            "languageFrom": "cs_CZ",
            "textSource": "košile",
            "languageTo": "pl_PL",
            "textTarget": "koszula",
        })
    }

    #[test]
    fn input_variable_is_a_one_element_list() {
        let document = tool().document(input()).unwrap();
        assert_eq!(
            document.variables_json()["input"],
            json!([{
                "languageFrom": "cs_CZ",
                "textSource": "košile",
                "languageTo": "pl_PL",
                "textTarget": "koszula",
            }])
        );
        assert!(
            document
                .text()
                .contains("$input: [GlossaryItemCreateOrUpdateInput!]!")
        );
    }

    #[test]
    fn all_four_arguments_are_required() {
        assert!(tool().document(json!({"languageFrom": "cs_CZ"})).is_err());
    }

    #[test]
    fn transport_failure_becomes_a_failed_outcome() {
        let outcome = tool().interpret(Err(TransportError::Status(
            reqwest::StatusCode::UNAUTHORIZED,
        )));
        assert!(!outcome.success);
        assert_eq!(outcome.kind, Some(FailureKind::Transport));
        assert!(outcome.message.contains("401"));
    }

    #[test]
    fn reported_errors_fail_with_the_payload_attached() {
        let result = json!({
            "glossaries": [],
            "errors": [{"code": "DUPLICATE", "message": "term exists"}]
        });
        let outcome =
            tool().interpret(Ok(json!({"data": {"glossaryItemCreateOrUpdate": result.clone()}})));
        assert!(!outcome.success);
        assert_eq!(outcome.kind, Some(FailureKind::RemoteRejected));
        assert_eq!(outcome.message, RETRIEVAL_FAILURE);
        assert_eq!(outcome.data, Some(result));
    }

    #[test]
    fn empty_errors_succeed_with_the_serialized_result() {
        let result = json!({"glossaries": [{"glossaryId": "g-1"}], "errors": []});
        let outcome =
            tool().interpret(Ok(json!({"data": {"glossaryItemCreateOrUpdate": result.clone()}})));
        assert!(outcome.success);
        assert_eq!(outcome.message, serde_json::to_string(&result).unwrap());
        assert_eq!(outcome.data, Some(result));
    }

    #[test]
    fn missing_result_is_a_retrieval_failure() {
        let outcome = tool().interpret(Ok(json!({"data": {}})));
        assert!(!outcome.success);
        assert_eq!(outcome.kind, Some(FailureKind::NotFound));
        assert_eq!(outcome.message, RETRIEVAL_FAILURE);
    }
}
