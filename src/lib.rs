//! To-do MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a simple
//! to-do list. Items can be added, marked important, completed and deleted,
//! and the list can be searched, filtered and sorted into a view.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` module - The item collection and its queries
//!
//! The list lives in memory only and is discarded when the server stops.
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::{Config, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load(None)?;
//!     let handler = TodoServerHandler::new(config.view);
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
pub mod handlers;
pub mod todo;
pub mod validation;

use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use config::{Config, ViewConfig};
pub use todo::{Filters, Item, ItemId, SortKey, TodoError, TodoList};

/// MCP Server handler for to-do list management
///
/// Owns the single in-memory list. Every tool call locks it, runs one
/// operation to completion and releases it.
pub struct TodoServerHandler {
    pub(crate) data: Mutex<TodoList>,
    pub(crate) view: ViewConfig,
}

impl TodoServerHandler {
    /// Create a new handler with an empty list
    ///
    /// # Arguments
    /// * `view` - Default view used by `list` for omitted parameters
    pub fn new(view: ViewConfig) -> Self {
        Self {
            data: Mutex::new(TodoList::new()),
            view,
        }
    }

    pub(crate) fn lock_list(&self) -> McpResult<MutexGuard<'_, TodoList>> {
        match self.data.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => bail!("To-do list state is unavailable after a previous failure"),
        }
    }
}

/// To-do list server.
///
/// Keeps an ordered list of items, each with two independent flags:
/// - **important**: highlighted items
/// - **done**: completed items
///
/// Item IDs use format: #1, #2, #3. IDs are never reused within a session.
/// Views combine a case-sensitive text search, flag filters (all active
/// filters must match) and one of three sort orders: insertion_date,
/// important (important first), done (done first).
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Add**: Append a new item to the end of the list. Text must not be blank.
    #[tool]
    async fn add(
        &self,
        /// Text: what needs to be done
        text: String,
    ) -> McpResult<String> {
        self.handle_add(text).await
    }

    /// **Delete**: Remove an item from the list permanently.
    #[tool]
    async fn remove(
        &self,
        /// ID of the item to remove (e.g., "#3")
        id: String,
    ) -> McpResult<String> {
        self.handle_remove(id).await
    }

    /// **Important**: Flip the important flag of an item.
    #[tool]
    async fn toggle_important(
        &self,
        /// ID of the item (e.g., "#3")
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_important(id).await
    }

    /// **Complete**: Flip the done flag of an item.
    #[tool]
    async fn toggle_done(
        &self,
        /// ID of the item (e.g., "#3")
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_done(id).await
    }

    /// **View**: List items, optionally searched, filtered and sorted.
    /// **Use**: No parameters = configured default view.
    #[tool]
    async fn list(
        &self,
        /// Search: case-sensitive substring of the item text (optional)
        query: Option<String>,
        /// Only important items (optional)
        important: Option<bool>,
        /// Only done items (optional)
        done: Option<bool>,
        /// Sort: insertion_date/important/done (optional)
        sort: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(query, important, done, sort).await
    }
}
