//! Formatting helper functions for the to-do MCP server
//!
//! This module renders an ordered view of items into the text returned to
//! the MCP client.

use crate::todo::{Item, TodoList};

/// Short state marker shown in front of each item
fn item_marker(item: &Item) -> &'static str {
    match (item.is_done(), item.is_important()) {
        (true, true) => "[x!]",
        (true, false) => "[x] ",
        (false, true) => "[ !]",
        (false, false) => "[ ] ",
    }
}

/// Format a view into a display string
///
/// # Arguments
/// * `items` - The items to render, already in display order
/// * `list` - The whole list, for the summary lines
///
/// # Returns
/// Formatted string representation of the view
pub fn format_items(items: &[&Item], list: &TodoList) -> String {
    let total = list.len();
    if items.is_empty() {
        return format!("No items found ({} in list)", total);
    }

    let mut result = format!("Showing {} of {} item(s):\n\n", items.len(), total);
    for item in items {
        result.push_str(&format!(
            "- {} {} {}\n",
            item_marker(item),
            item.id(),
            item.text()
        ));
        result.push_str(&format!(
            "  Created: {}\n",
            item.created_at().format("%Y-%m-%d %H:%M:%S")
        ));
    }
    result.push_str(&format!(
        "\nIn list: {} done, {} important\n",
        list.done_count(),
        list.important_count()
    ));

    result
}
