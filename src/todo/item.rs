use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;

/// Get the current time in local timezone
pub fn local_now() -> DateTime<Local> {
    Local::now()
}

/// Identifier of an item within a [`TodoList`](super::TodoList)
///
/// Ids are handed out by the list from a counter that only grows, so an id is
/// never reused after its item has been removed. Displayed as `#<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    /// The numeric value behind the id
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = String;

    /// Accepts both `#3` and `3`, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits.parse::<u32>().map(ItemId).map_err(|_| {
            format!(
                "Invalid item ID '{}'. Use the ID shown by list (e.g., '#3')",
                s
            )
        })
    }
}

/// A single to-do entry
///
/// The text and creation time are fixed at construction. The two flags are
/// independent of each other and only change through the owning list's
/// toggle operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    text: String,
    created_at: DateTime<Local>,
    important: bool,
    done: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, text: String, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            text,
            created_at,
            important: false,
            done: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn toggle_important(&mut self) {
        self.important = !self.important;
    }

    pub(crate) fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}
