//! Typed GraphQL document builder.
//!
//! Every tool builds its operation through this builder rather than an ad hoc
//! variable map, so the document shape (operation name, declared variable
//! types, field selection) lives in one place per operation.

use serde_json::{Map, Value, json};

use crate::errors::McpError;
use crate::outcome::Outcome;
use crate::transport::{Transport, TransportError};
use rmcp::model::CallToolResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// A named variable binding with an optional explicit GraphQL type. When no
/// type is given, one is inferred from the JSON value.
#[derive(Debug, Clone)]
pub struct Variable {
    name: &'static str,
    value: Value,
    graphql_type: Option<&'static str>,
    required: bool,
}

impl Variable {
    pub fn new(name: &'static str, value: Value) -> Self {
        Self {
            name,
            value,
            graphql_type: None,
            required: false,
        }
    }

    pub fn typed(name: &'static str, value: Value, graphql_type: &'static str) -> Self {
        Self {
            name,
            value,
            graphql_type: Some(graphql_type),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn declared_type(&self) -> String {
        let base = self.graphql_type.unwrap_or_else(|| infer_type(&self.value));
        if self.required {
            format!("{base}!")
        } else {
            base.to_string()
        }
    }
}

fn infer_type(value: &Value) -> &'static str {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => "Int",
        Value::Number(_) => "Float",
        Value::Bool(_) => "Boolean",
        _ => "String",
    }
}

/// One entry in a field selection
#[derive(Debug, Clone)]
pub enum Selection {
    Field(&'static str),
    Object(&'static str, Vec<Selection>),
}

impl Selection {
    fn write(&self, out: &mut String) {
        match self {
            Self::Field(name) => out.push_str(name),
            Self::Object(name, children) => {
                out.push_str(name);
                out.push_str(" { ");
                write_selections(children, out);
                out.push_str(" }");
            }
        }
    }
}

fn write_selections(selections: &[Selection], out: &mut String) {
    let mut first = true;
    for selection in selections {
        if !first {
            out.push(' ');
        }
        selection.write(out);
        first = false;
    }
}

/// A complete GraphQL operation: kind, operation name, root field, variable
/// bindings, and the requested field selection. Built fresh per call and not
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct Document {
    kind: OperationKind,
    name: &'static str,
    field: &'static str,
    variables: Vec<Variable>,
    selection: Vec<Selection>,
}

impl Document {
    pub fn query(name: &'static str, field: &'static str) -> Self {
        Self::new(OperationKind::Query, name, field)
    }

    pub fn mutation(name: &'static str, field: &'static str) -> Self {
        Self::new(OperationKind::Mutation, name, field)
    }

    fn new(kind: OperationKind, name: &'static str, field: &'static str) -> Self {
        Self {
            kind,
            name,
            field,
            variables: Vec::new(),
            selection: Vec::new(),
        }
    }

    pub fn variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn selection(mut self, selection: Vec<Selection>) -> Self {
        self.selection = selection;
        self
    }

    /// The root field under `data` in the response
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The operation text, e.g.
    /// `query ProductList($first: Int!) { products(first: $first) { ... } }`
    pub fn text(&self) -> String {
        let mut out = String::new();
        out.push_str(self.kind.keyword());
        out.push(' ');
        out.push_str(self.name);
        if !self.variables.is_empty() {
            out.push('(');
            for (i, variable) in self.variables.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('$');
                out.push_str(variable.name);
                out.push_str(": ");
                out.push_str(&variable.declared_type());
            }
            out.push(')');
        }
        out.push_str(" { ");
        out.push_str(self.field);
        if !self.variables.is_empty() {
            out.push('(');
            for (i, variable) in self.variables.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(variable.name);
                out.push_str(": $");
                out.push_str(variable.name);
            }
            out.push(')');
        }
        out.push_str(" { ");
        write_selections(&self.selection, &mut out);
        out.push_str(" } }");
        out
    }

    /// The variable bindings as a JSON map. Null-valued variables stay bound;
    /// the remote treats a null `language` as "all languages".
    pub fn variables_json(&self) -> Value {
        let mut map = Map::new();
        for variable in &self.variables {
            map.insert(variable.name.to_string(), variable.value.clone());
        }
        Value::Object(map)
    }

    /// The GraphQL-over-HTTP POST body
    pub fn body(&self) -> Value {
        json!({
            "query": self.text(),
            "variables": self.variables_json(),
            "operationName": self.name,
        })
    }
}

/// Able to be executed as a GraphQL operation against the Loco API
pub trait Executable {
    /// Build the document for this invocation
    fn document(&self, input: Value) -> Result<Document, McpError>;

    /// Interpret the transport result into a normalized outcome
    fn interpret(&self, response: Result<Value, TransportError>) -> Outcome;

    /// Build, send, and interpret. Per-call failures land in the outcome,
    /// never as a protocol error.
    async fn execute(
        &self,
        transport: &Transport,
        input: Value,
    ) -> Result<CallToolResult, McpError> {
        let document = self.document(input)?;
        let response = transport.send(&document).await;
        Ok(self.interpret(response).into_call_tool_result())
    }
}

/// Unwrap `data.<field>` from a raw response body, treating null as absent
pub fn operation_data<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    body.get("data")
        .and_then(|data| data.get(field))
        .filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_text_declares_and_binds_variables() {
        let document = Document::query("ProductList", "products")
            .variable(Variable::new("first", json!(5)).required())
            .variable(Variable::new("after", json!("abc")))
            .selection(vec![Selection::Object(
                "pageInfo",
                vec![Selection::Field("hasNextPage"), Selection::Field("endCursor")],
            )]);

        assert_eq!(
            document.text(),
            "query ProductList($first: Int!, $after: String) \
             { products(first: $first, after: $after) \
             { pageInfo { hasNextPage endCursor } } }"
        );
        assert_eq!(
            document.variables_json(),
            json!({"first": 5, "after": "abc"})
        );
    }

    #[test]
    fn mutation_text_uses_explicit_types() {
        let document = Document::mutation("ProductTranslationDelete", "productTranslationDelete")
            .variable(Variable::typed("language", Value::Null, "LanguageEnum"))
            .variable(Variable::new("productIdentifier", json!("ABC-123")))
            .selection(vec![
                Selection::Field("status"),
                Selection::Object(
                    "errors",
                    vec![Selection::Field("code"), Selection::Field("message")],
                ),
            ]);

        assert_eq!(
            document.text(),
            "mutation ProductTranslationDelete($language: LanguageEnum, $productIdentifier: String) \
             { productTranslationDelete(language: $language, productIdentifier: $productIdentifier) \
             { status errors { code message } } }"
        );
    }

    #[test]
    fn null_variables_stay_bound() {
        let document = Document::mutation("ProductTranslationDelete", "productTranslationDelete")
            .variable(Variable::typed("language", Value::Null, "LanguageEnum"))
            .selection(vec![Selection::Field("status")]);

        let variables = document.variables_json();
        assert!(variables.get("language").is_some());
        assert_eq!(variables["language"], Value::Null);
    }

    #[test]
    fn body_carries_operation_name() {
        let document = Document::query("ProductList", "products")
            .variable(Variable::new("first", json!(1)).required())
            .selection(vec![Selection::Field("pageInfo")]);

        let body = document.body();
        assert_eq!(body["operationName"], json!("ProductList"));
        assert_eq!(body["variables"], json!({"first": 1}));
        assert!(body["query"].as_str().unwrap().starts_with("query ProductList"));
    }

    #[test]
    fn variable_types_are_inferred_from_values() {
        assert_eq!(Variable::new("a", json!(1)).declared_type(), "Int");
        assert_eq!(Variable::new("a", json!(1.5)).declared_type(), "Float");
        assert_eq!(Variable::new("a", json!(true)).declared_type(), "Boolean");
        assert_eq!(Variable::new("a", json!("x")).declared_type(), "String");
        assert_eq!(
            Variable::typed("a", json!([]), "[GlossaryItemCreateOrUpdateInput!]")
                .required()
                .declared_type(),
            "[GlossaryItemCreateOrUpdateInput!]!"
        );
    }

    #[test]
    fn operation_data_filters_null_and_missing() {
        let body = json!({"data": {"products": {"edges": []}}});
        assert!(operation_data(&body, "products").is_some());
        assert!(operation_data(&json!({"data": {"products": null}}), "products").is_none());
        assert!(operation_data(&json!({}), "products").is_none());
    }
}
