use crate::todo::error::TodoError;
use crate::todo::item::{Item, ItemId, local_now};
use chrono::{DateTime, Local};

#[derive(Debug, Default)]
pub struct TodoList {
    /// All items in insertion order
    ///
    /// The Vec order is the canonical order of the list. Sorting never
    /// reorders it; views are computed as separate sequences of references.
    pub(crate) items: Vec<Item>,

    /// Counter for generating unique item IDs
    ///
    /// Only ever incremented, so ids of removed items are not handed out again.
    item_counter: u32,
}

impl TodoList {
    /// Create a new empty TodoList instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique item ID
    fn generate_item_id(&mut self) -> ItemId {
        self.item_counter += 1;
        ItemId::new(self.item_counter)
    }

    /// Number of items in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    fn find_item_by_id_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Find an item by its ID
    ///
    /// # Returns
    /// The item, or `TodoError::NotFound` if no item has this ID
    pub fn get(&self, id: ItemId) -> Result<&Item, TodoError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// Append a new item created now
    ///
    /// # Arguments
    /// * `text` - Display text; rejected if empty after trimming
    ///
    /// # Returns
    /// The newly appended item
    pub fn add(&mut self, text: &str) -> Result<&Item, TodoError> {
        self.add_with_timestamp(text, local_now())
    }

    /// Append a new item with an explicit creation time
    ///
    /// The text is stored as given; trimming is only used to reject blank input.
    pub fn add_with_timestamp(
        &mut self,
        text: &str,
        created_at: DateTime<Local>,
    ) -> Result<&Item, TodoError> {
        if text.trim().is_empty() {
            return Err(TodoError::Validation(
                "item text must not be empty".to_string(),
            ));
        }

        let id = self.generate_item_id();
        tracing::debug!(%id, "adding item");
        self.items.push(Item::new(id, text.to_string(), created_at));

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Remove an item and return it
    ///
    /// Removing an ID that is not present (including one removed earlier)
    /// always reports `TodoError::NotFound`.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, TodoError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(TodoError::NotFound(id))?;
        tracing::debug!(%id, "removing item");
        Ok(self.items.remove(pos))
    }

    /// Flip the important flag of an item
    ///
    /// # Returns
    /// The item with its updated flag
    pub fn toggle_important(&mut self, id: ItemId) -> Result<&Item, TodoError> {
        let item = self
            .find_item_by_id_mut(id)
            .ok_or(TodoError::NotFound(id))?;
        item.toggle_important();
        tracing::debug!(%id, important = item.is_important(), "toggled important");
        Ok(item)
    }

    /// Flip the done flag of an item
    ///
    /// # Returns
    /// The item with its updated flag
    pub fn toggle_done(&mut self, id: ItemId) -> Result<&Item, TodoError> {
        let item = self
            .find_item_by_id_mut(id)
            .ok_or(TodoError::NotFound(id))?;
        item.toggle_done();
        tracing::debug!(%id, done = item.is_done(), "toggled done");
        Ok(item)
    }
}
