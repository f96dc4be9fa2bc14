//! To-do domain models and business logic
//!
//! This module contains the core to-do data structures and their implementations.
//! It is split into submodules for better organization:
//! - `item`: A single to-do entry and its identifier
//! - `todo_list`: The ordered item collection with its mutating operations
//! - `queries`: Search, filter and sort views over the collection
//! - `error`: Typed errors reported by the collection

mod error;
mod item;
mod queries;
mod todo_list;

// Re-export all public types
pub use error::TodoError;
pub use item::{Item, ItemId, local_now};
pub use queries::{Filters, SortKey};
pub use todo_list::TodoList;
