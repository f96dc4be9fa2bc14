//! Toggle handlers for the to-do MCP server
//!
//! Both flags are independent; each call flips one of them and reports the
//! resulting state.

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    pub async fn handle_toggle_important(&self, id: String) -> McpResult<String> {
        let item_id = validation::parse_item_id(&id)?;

        let mut data = self.lock_list()?;
        let item = data
            .toggle_important(item_id)
            .map_err(validation::todo_error)?;
        let state = if item.is_important() {
            "marked as important"
        } else {
            "no longer important"
        };
        let result = format!("Item {} {}", item.id(), state);
        drop(data);

        Ok(result)
    }

    pub async fn handle_toggle_done(&self, id: String) -> McpResult<String> {
        let item_id = validation::parse_item_id(&id)?;

        let mut data = self.lock_list()?;
        let item = data.toggle_done(item_id).map_err(validation::todo_error)?;
        let state = if item.is_done() {
            "marked as done"
        } else {
            "marked as not done"
        };
        let result = format!("Item {} {}", item.id(), state);
        drop(data);

        Ok(result)
    }
}
