//! Helpers shared by the product tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::products::ProductError;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Wrap a handler reply as a tool result.
///
/// The text content is the reply as the REST route would send it; plain
/// string replies are passed through unquoted. Object replies are also
/// attached as structured content.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    let json = match serde_json::to_value(value) {
        Ok(json) => json,
        Err(e) => return error_result(&format!("Failed to serialize result: {}", e)),
    };

    let text = match &json {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let structured_content = json.is_object().then_some(json);

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content,
        is_error: Some(false),
        meta: None,
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Report a storage failure to the calling agent.
pub fn storage_failure(err: &ProductError) -> CallToolResult {
    error_result(&format!("Product operation failed: {}", err))
}

/// Deserialize raw tool arguments into a parameter struct.
#[cfg(feature = "http")]
pub fn parse_arguments<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::json!({}),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Serialize the full CallToolResult to preserve all fields including structuredContent.
#[cfg(feature = "http")]
pub fn to_http_value(result: &CallToolResult) -> Result<serde_json::Value, ToolError> {
    serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
}
