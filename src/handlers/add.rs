//! Add handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Appends a new item built from the raw input text.
    /// Blank text is rejected and the list stays unchanged.
    pub async fn handle_add(&self, text: String) -> McpResult<String> {
        let mut data = self.lock_list()?;

        let id = data.add(&text).map_err(validation::todo_error)?.id();
        drop(data);

        tracing::info!(%id, "item added");
        Ok(format!("Item created with ID: {}", id))
    }
}
