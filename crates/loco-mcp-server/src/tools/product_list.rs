use rmcp::model::{Tool, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::graphql::{Document, Executable, Selection, Variable, operation_data};
use crate::outcome::{FailureKind, Outcome, RETRIEVAL_FAILURE};
use crate::schema_from_type;
use crate::tools::invalid_input;
use crate::transport::TransportError;
use crate::errors::McpError;

pub const PRODUCT_LIST_TOOL_NAME: &str = "product_list";

#[derive(Clone)]
pub struct ProductList {
    pub tool: Tool,
}

/// Input for the product_list tool.
#[derive(JsonSchema, Deserialize)]
pub struct Input {
    /// Number of products per page. The total is reported in `pageInfo`, so
    /// `first: 1` is enough to count products.
    #[schemars(range(min = 1, max = 100))]
    first: u32,

    /// Cursor for pagination, from a previous page's `endCursor`
    after: Option<String>,

    /// Filter by client identifier (e.g. 'ABC-123', '1456')
    #[schemars(schema_with = "String::json_schema", default)]
    identifier: Option<Value>,
}

impl ProductList {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                PRODUCT_LIST_TOOL_NAME,
                "List products with their translations. Returns one page of \
                 edges plus pageInfo with the total count and a cursor for \
                 the next page.",
                schema_from_type!(Input),
            )
            .annotate(ToolAnnotations::new().read_only(true)),
        }
    }
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new()
    }
}

/// Client identifiers arrive as strings or bare numbers; the remote expects
/// a string either way
fn coerce_identifier(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl Executable for ProductList {
    fn document(&self, input: Value) -> Result<Document, McpError> {
        let input = serde_json::from_value::<Input>(input).map_err(|_| invalid_input())?;

        let mut document = Document::query("ProductList", "products")
            .variable(Variable::new("first", json!(input.first)).required())
            .selection(vec![
                Selection::Object(
                    "edges",
                    vec![Selection::Object(
                        "node",
                        vec![
                            Selection::Field("productId"),
                            Selection::Field("code"),
                            Selection::Field("identifier"),
                            Selection::Field("status"),
                            Selection::Object(
                                "translation",
                                vec![
                                    Selection::Field("language"),
                                    Selection::Field("title"),
                                    Selection::Field("description"),
                                ],
                            ),
                        ],
                    )],
                ),
                Selection::Object(
                    "pageInfo",
                    vec![
                        Selection::Field("hasNextPage"),
                        Selection::Field("endCursor"),
                        Selection::Field("count"),
                        Selection::Field("total"),
                    ],
                ),
            ]);

        if let Some(after) = input.after {
            document = document.variable(Variable::new("after", json!(after)));
        }
        if let Some(identifier) = input.identifier {
            document =
                document.variable(Variable::new("identifier", json!(coerce_identifier(identifier))));
        }

        Ok(document)
    }

    fn interpret(&self, response: Result<Value, TransportError>) -> Outcome {
        let body = match response {
            Ok(body) => body,
            Err(error) => return Outcome::from(error),
        };

        let Some(products) = operation_data(&body, "products") else {
            return Outcome::failure(FailureKind::NotFound, RETRIEVAL_FAILURE);
        };

        match products.get("edges").and_then(Value::as_array) {
            // An empty page is a successful answer, not an error
            Some(edges) if edges.is_empty() => Outcome::success("No products found", json!([])),
            Some(edges) => Outcome::success(
                format!("Count product: {}", edges.len()),
                products.clone(),
            ),
            None => Outcome::failure(FailureKind::NotFound, RETRIEVAL_FAILURE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tool() -> ProductList {
        ProductList::new()
    }

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(100)]
    fn first_flows_into_the_document(#[case] first: u32) {
        let document = tool().document(json!({"first": first})).unwrap();
        assert_eq!(document.variables_json()["first"], json!(first));
        assert!(document.text().contains("$first: Int!"));
    }

    #[test]
    fn optional_variables_are_omitted_when_absent() {
        let document = tool().document(json!({"first": 10})).unwrap();
        let variables = document.variables_json();
        assert!(variables.get("after").is_none());
        assert!(variables.get("identifier").is_none());
    }

    #[test]
    fn cursor_and_identifier_are_bound_when_present() {
        let document = tool()
            .document(json!({"first": 10, "after": "Y3Vyc29y", "identifier": "ABC-123"}))
            .unwrap();
        let variables = document.variables_json();
        assert_eq!(variables["after"], json!("Y3Vyc29y"));
        assert_eq!(variables["identifier"], json!("ABC-123"));
    }

    #[test]
    fn numeric_identifiers_are_coerced_to_strings() {
        let document = tool()
            .document(json!({"first": 10, "identifier": 1456}))
            .unwrap();
        assert_eq!(document.variables_json()["identifier"], json!("1456"));
    }

    #[test]
    fn missing_first_is_invalid_input() {
        assert!(tool().document(json!({})).is_err());
    }

    #[test]
    fn transport_failure_becomes_a_failed_outcome() {
        let outcome = tool().interpret(Err(TransportError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert!(!outcome.success);
        assert_eq!(outcome.kind, Some(FailureKind::Transport));
        assert!(outcome.message.contains("500"));
        assert_eq!(outcome.data, None);
    }

    #[test]
    fn null_products_is_a_retrieval_failure() {
        let outcome = tool().interpret(Ok(json!({"data": {"products": null}})));
        assert!(!outcome.success);
        assert_eq!(outcome.kind, Some(FailureKind::NotFound));
        assert_eq!(outcome.message, RETRIEVAL_FAILURE);
        assert_eq!(outcome.data, None);
    }

    #[test]
    fn empty_page_is_a_success() {
        let outcome = tool().interpret(Ok(json!({
            "data": {"products": {"edges": [], "pageInfo": {"hasNextPage": false}}}
        })));
        assert!(outcome.success, "an empty page must not be flagged as an error");
        assert_eq!(outcome.message, "No products found");
        assert_eq!(outcome.data, Some(json!([])));
    }

    #[test]
    fn populated_page_reports_the_edge_count() {
        let products = json!({
            "edges": [
                {"node": {"productId": "1", "code": "A", "identifier": "ABC-1", "status": "ACTIVE"}},
                {"node": {"productId": "2", "code": "B", "identifier": "ABC-2", "status": "ACTIVE"}}
            ],
            "pageInfo": {"hasNextPage": false, "endCursor": null, "count": 2, "total": 2}
        });
        let outcome = tool().interpret(Ok(json!({"data": {"products": products.clone()}})));
        assert!(outcome.success);
        assert_eq!(outcome.message, "Count product: 2");
        assert_eq!(outcome.data, Some(products));
    }
}
