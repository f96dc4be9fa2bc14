//! Validation helper functions for the to-do MCP server
//!
//! This module turns raw tool parameters into typed values and maps
//! collection errors onto MCP errors.

use crate::todo::{ItemId, SortKey, TodoError};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate an item ID parameter
///
/// # Arguments
/// * `id_str` - ID string, with or without the leading '#'
///
/// # Returns
/// Result containing parsed ItemId or error
pub fn parse_item_id(id_str: &str) -> McpResult<ItemId> {
    id_str.parse::<ItemId>().map_err(invalid_params)
}

/// Parse and validate sort key parameter
///
/// # Arguments
/// * `sort_str` - One of insertion_date, important, done
///
/// # Returns
/// Result containing parsed SortKey or error
pub fn parse_sort_key(sort_str: &str) -> McpResult<SortKey> {
    sort_str.parse::<SortKey>().map_err(invalid_params)
}

/// Convert a collection error into an MCP error with a public message
pub fn todo_error(err: TodoError) -> mcp_attr::Error {
    tracing::warn!(error = %err, "rejected todo operation");
    invalid_params(err.to_string())
}
