//! Bulk selection.
//!
//! The selection is a transient set of record keys. It is not tied to the
//! visible page, is never persisted, and only touches the store through
//! [`Selection::bulk_delete`].

use crate::model::Person;
use crate::store::events::ChangeEvent;
use crate::store::record_store::RecordStore;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn deselect(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// Selects every record in `records`, which callers pass as the full,
    /// unsorted and unpaginated store contents.
    pub fn select_all(&mut self, records: &[Person]) {
        self.keys.extend(records.iter().map(|p| p.key.clone()));
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drops keys whose records were deleted.
    pub fn forget<I, K>(&mut self, deleted: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in deleted {
            self.keys.remove(key.as_ref());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys, sorted for stable output.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Deletes every selected record, then clears the selection no matter how
    /// many records were actually removed.
    pub fn bulk_delete(&mut self, store: &mut RecordStore) -> ChangeEvent {
        let event = store.delete_many(&self.keys);
        self.clear();
        event
    }
}
