//! Query methods for TodoList
//!
//! This module contains the read-only views over a TodoList: substring
//! search, flag filters and the sort strategies. None of them reorder the
//! list itself; they produce sequences of references the caller renders.

use super::item::Item;
use super::todo_list::TodoList;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// Active flag filters
///
/// Every active flag must hold for an item to pass. With no flag active
/// every item passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub important: bool,
    pub done: bool,
}

impl Filters {
    /// Check whether an item satisfies all active filters
    pub fn matches(&self, item: &Item) -> bool {
        (!self.important || item.is_important()) && (!self.done || item.is_done())
    }
}

/// Sort strategy for a view
///
/// Uses snake_case naming to match the TOML configuration format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Oldest first, by creation time
    #[default]
    InsertionDate,
    /// Important items first
    Important,
    /// Done items first
    Done,
}

impl SortKey {
    /// Compare two items under this strategy
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::InsertionDate => a.created_at().cmp(&b.created_at()),
            // `true` sorts after `false`, so compare reversed to put flagged items first
            SortKey::Important => b.is_important().cmp(&a.is_important()),
            SortKey::Done => b.is_done().cmp(&a.is_done()),
        }
    }

    /// Stable sort of a view; items with equal keys keep their relative order
    pub fn sort(self, items: &mut [&Item]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insertion_date" => Ok(SortKey::InsertionDate),
            "important" => Ok(SortKey::Important),
            "done" => Ok(SortKey::Done),
            _ => Err(format!(
                "Invalid sort key '{}'. Valid options are: insertion_date, important, done",
                s
            )),
        }
    }
}

impl TodoList {
    /// Items whose text contains `query` (case-sensitive)
    ///
    /// The returned iterator is lazy and can be cloned to restart it.
    /// An empty query yields every item.
    pub fn search<'a, 'q>(&'a self, query: &'q str) -> impl Iterator<Item = &'a Item> + Clone {
        self.items
            .iter()
            .filter(move |item| item.text().contains(query))
    }

    /// Items matching all active filters, in insertion order
    pub fn filter(&self, filters: Filters) -> impl Iterator<Item = &Item> + Clone {
        self.items.iter().filter(move |item| filters.matches(item))
    }

    /// All items ordered by `key`
    ///
    /// The list's own insertion order is left untouched.
    pub fn sort_by(&self, key: SortKey) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        key.sort(&mut items);
        items
    }

    /// Search, filter and sort in one pass, as a view is rendered
    pub fn view(&self, query: &str, filters: Filters, key: SortKey) -> Vec<&Item> {
        let mut items: Vec<&Item> = self
            .search(query)
            .filter(|item| filters.matches(item))
            .collect();
        key.sort(&mut items);
        items
    }

    /// Count items marked done
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_done()).count()
    }

    /// Count items marked important
    pub fn important_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_important()).count()
    }
}
