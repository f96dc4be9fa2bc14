//! List handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::Filters;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Handles search/filter/sort - builds the current view and formats it for display.
    /// Omitted parameters fall back to the configured default view.
    pub async fn handle_list(
        &self,
        query: Option<String>,
        important: Option<bool>,
        done: Option<bool>,
        sort: Option<String>,
    ) -> McpResult<String> {
        // Parse and validate sort key
        let sort_key = if let Some(ref sort_str) = sort {
            validation::parse_sort_key(sort_str)?
        } else {
            self.view.sort
        };

        let defaults = self.view.filters();
        let filters = Filters {
            important: important.unwrap_or(defaults.important),
            done: done.unwrap_or(defaults.done),
        };
        let query = query.unwrap_or_default();

        let data = self.lock_list()?;
        let items = data.view(&query, filters, sort_key);
        let result = formatting::format_items(&items, &data);
        drop(data);

        Ok(result)
    }
}
