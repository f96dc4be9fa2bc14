//! MCP tool handler tests
mod common;

use common::{extract_id_from_response, get_test_handler};
use todo_mcp::*;

#[tokio::test]
async fn test_add_and_list() {
    let handler = get_test_handler();

    let response = handler.handle_add("Buy milk".to_string()).await.unwrap();
    assert_eq!(extract_id_from_response(&response), "#1");

    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert!(list.starts_with("Showing 1 of 1 item(s):"));
    assert!(list.contains("#1 Buy milk"));
}

#[tokio::test]
async fn test_add_blank_text_is_rejected() {
    let handler = get_test_handler();

    assert!(handler.handle_add(String::new()).await.is_err());
    assert!(handler.handle_add("  ".to_string()).await.is_err());

    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert_eq!(list, "No items found (0 in list)");
}

#[tokio::test]
async fn test_toggle_reports_new_state() {
    let handler = get_test_handler();
    let response = handler.handle_add("Buy milk".to_string()).await.unwrap();
    let id = extract_id_from_response(&response);

    let result = handler.handle_toggle_important(id.clone()).await.unwrap();
    assert_eq!(result, "Item #1 marked as important");
    let result = handler.handle_toggle_important(id.clone()).await.unwrap();
    assert_eq!(result, "Item #1 no longer important");

    let result = handler.handle_toggle_done(id.clone()).await.unwrap();
    assert_eq!(result, "Item #1 marked as done");
    let result = handler.handle_toggle_done(id).await.unwrap();
    assert_eq!(result, "Item #1 marked as not done");
}

#[tokio::test]
async fn test_ids_accepted_without_hash() {
    let handler = get_test_handler();
    handler.handle_add("Buy milk".to_string()).await.unwrap();

    assert!(handler.handle_toggle_done("1".to_string()).await.is_ok());
}

#[tokio::test]
async fn test_invalid_and_unknown_ids() {
    let handler = get_test_handler();
    handler.handle_add("Buy milk".to_string()).await.unwrap();

    assert!(handler.handle_toggle_done("milk".to_string()).await.is_err());
    assert!(handler.handle_toggle_important("#9".to_string()).await.is_err());
    assert!(handler.handle_remove("#9".to_string()).await.is_err());
}

#[tokio::test]
async fn test_remove_twice() {
    let handler = get_test_handler();
    handler.handle_add("Buy milk".to_string()).await.unwrap();

    let result = handler.handle_remove("#1".to_string()).await.unwrap();
    assert_eq!(result, "Item #1 removed: Buy milk");
    assert!(handler.handle_remove("#1".to_string()).await.is_err());
}

#[tokio::test]
async fn test_list_combines_query_filters_and_sort() {
    let handler = get_test_handler();
    for text in ["buy milk", "walk dog", "buy bread", "buy eggs"] {
        handler.handle_add(text.to_string()).await.unwrap();
    }
    handler.handle_toggle_done("#4".to_string()).await.unwrap();
    handler.handle_toggle_important("#4".to_string()).await.unwrap();
    handler.handle_toggle_important("#1".to_string()).await.unwrap();

    let list = handler
        .handle_list(
            Some("buy".to_string()),
            Some(true),
            None,
            Some("done".to_string()),
        )
        .await
        .unwrap();

    assert!(list.starts_with("Showing 2 of 4 item(s):"));
    let eggs = list.find("#4 buy eggs").unwrap();
    let milk = list.find("#1 buy milk").unwrap();
    assert!(eggs < milk);
    assert!(!list.contains("buy bread"));
    assert!(!list.contains("walk dog"));
}

#[tokio::test]
async fn test_list_rejects_unknown_sort() {
    let handler = get_test_handler();

    let result = handler
        .handle_list(None, None, None, Some("alphabetical".to_string()))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_uses_configured_default_view() {
    let view = ViewConfig {
        sort: SortKey::Important,
        important_only: false,
        done_only: true,
    };
    let handler = TodoServerHandler::new(view);
    for text in ["A", "B", "C"] {
        handler.handle_add(text.to_string()).await.unwrap();
    }
    handler.handle_toggle_done("#1".to_string()).await.unwrap();
    handler.handle_toggle_done("#3".to_string()).await.unwrap();
    handler.handle_toggle_important("#3".to_string()).await.unwrap();

    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert!(list.starts_with("Showing 2 of 3 item(s):"));
    assert!(list.find("#3 C").unwrap() < list.find("#1 A").unwrap());

    // Explicit parameters override the configured filters
    let list = handler
        .handle_list(None, None, Some(false), None)
        .await
        .unwrap();
    assert!(list.starts_with("Showing 3 of 3 item(s):"));
}
