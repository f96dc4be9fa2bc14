//! Common test utilities for integration tests

#![allow(dead_code)]

use todo_mcp::{Item, ItemId, TodoList, TodoServerHandler, ViewConfig};

/// Create a test handler with the default view
pub fn get_test_handler() -> TodoServerHandler {
    TodoServerHandler::new(ViewConfig::default())
}

/// Extract item ID from add() response message
/// Response format: "Item created with ID: #<n>"
pub fn extract_id_from_response(response: &str) -> String {
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string()
}

/// Build a list from texts, in order, returning the list and the assigned IDs
pub fn list_with_items(texts: &[&str]) -> (TodoList, Vec<ItemId>) {
    let mut list = TodoList::new();
    let ids = texts
        .iter()
        .map(|text| list.add(text).unwrap().id())
        .collect();
    (list, ids)
}

/// Texts of a view, in view order
pub fn texts<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<String> {
    items.into_iter().map(|i| i.text().to_string()).collect()
}
