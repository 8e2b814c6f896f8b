use lingo_types::WordEntry;
use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreError, load_json, save_json};

pub const NOTEBOOK_KEY: &str = "lingopop_notebook";

/// Saved lookups, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook {
    entries: Vec<WordEntry>,
}

impl Notebook {
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        Ok(load_json(store, NOTEBOOK_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        save_json(store, NOTEBOOK_KEY, self)
    }

    /// Returns false when an entry with the same id is already saved
    pub fn add(&mut self, entry: WordEntry) -> bool {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return false;
        }
        self.entries.insert(0, entry);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<WordEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
