//! Process-local contact store.

use super::{ContactStore, StoreResult};
use crate::model::collection::ContactCollection;
use std::cell::{Cell, RefCell};

/// In-memory store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<ContactCollection>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `collection`.
    pub fn with_collection(collection: ContactCollection) -> Self {
        Self {
            saved: RefCell::new(collection),
            saves: Cell::new(0),
        }
    }

    /// Copy of the last saved collection.
    pub fn saved(&self) -> ContactCollection {
        self.saved.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemoryStore {
    fn load(&self) -> StoreResult<ContactCollection> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, collection: &ContactCollection) -> StoreResult<()> {
        *self.saved.borrow_mut() = collection.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
