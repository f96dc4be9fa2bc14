use super::item::ItemId;
use thiserror::Error;

/// Errors reported by [`TodoList`](super::TodoList) operations
///
/// Neither kind is fatal: the list is left unchanged and the caller decides
/// how to surface the rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The input was rejected before touching the list
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The operation referenced an id that is not in the list
    #[error("Item {0} not found")]
    NotFound(ItemId),
}
