//! Remove handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Deletes an item. Unknown or already removed IDs are reported as errors.
    pub async fn handle_remove(&self, id: String) -> McpResult<String> {
        let item_id = validation::parse_item_id(&id)?;

        let mut data = self.lock_list()?;
        let removed = data.remove(item_id).map_err(validation::todo_error)?;
        drop(data);

        tracing::info!(id = %item_id, "item removed");
        Ok(format!("Item {} removed: {}", removed.id(), removed.text()))
    }
}
