//! List Store Module
//!
//! Named double-ended queues of strings.

use std::collections::{HashMap, VecDeque};

// == List Store ==
/// Owns every list in the keyspace.
///
/// A list exists only while it has at least one element; the pop that
/// empties it also removes the key.
#[derive(Debug, Default)]
pub struct ListStore {
    lists: HashMap<String, VecDeque<String>>,
}

impl ListStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push ==
    /// Prepends `value`, creating the list if needed. Returns the new length.
    pub fn push_left(&mut self, key: String, value: String) -> usize {
        let list = self.lists.entry(key).or_default();
        list.push_front(value);
        list.len()
    }

    /// Appends `value`, creating the list if needed. Returns the new length.
    pub fn push_right(&mut self, key: String, value: String) -> usize {
        let list = self.lists.entry(key).or_default();
        list.push_back(value);
        list.len()
    }

    // == Pop ==
    /// Removes and returns the first element.
    pub fn pop_left(&mut self, key: &str) -> Option<String> {
        self.pop_with(key, VecDeque::pop_front)
    }

    /// Removes and returns the last element.
    pub fn pop_right(&mut self, key: &str) -> Option<String> {
        self.pop_with(key, VecDeque::pop_back)
    }

    fn pop_with(
        &mut self,
        key: &str,
        pop: impl FnOnce(&mut VecDeque<String>) -> Option<String>,
    ) -> Option<String> {
        let list = self.lists.get_mut(key)?;
        let value = pop(list);
        if list.is_empty() {
            self.lists.remove(key);
        }
        value
    }

    // == Length ==
    /// Number of elements in the list at `key`, 0 if absent.
    pub fn length(&self, key: &str) -> usize {
        self.lists.get(key).map_or(0, VecDeque::len)
    }

    /// Whether a list is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lists.contains_key(key)
    }

    /// Number of lists stored.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if no lists are stored.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
