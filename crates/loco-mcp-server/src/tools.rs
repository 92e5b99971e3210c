//! The MCP tools exposed by this server, one per Loco GraphQL operation.

mod glossary_item_upsert;
mod product_delete_translation;
mod product_list;

pub use glossary_item_upsert::{GLOSSARY_ITEM_UPSERT_TOOL_NAME, GlossaryItemUpsert};
pub use product_delete_translation::{
    PRODUCT_DELETE_TRANSLATION_TOOL_NAME, ProductDeleteTranslation,
};
pub use product_list::{PRODUCT_LIST_TOOL_NAME, ProductList};

use crate::errors::McpError;
use rmcp::model::ErrorCode;

pub(crate) fn invalid_input() -> McpError {
    McpError::new(ErrorCode::INVALID_PARAMS, "Invalid input".to_string(), None)
}
