//! Generic in-memory keyed store.
//!
//! One reader/writer lock guards the whole map: lookups and scans share it, inserts and
//! removals take it exclusively. Entries live only as long as the process. Callers always
//! receive clones, never references into the map.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Anything that can name its own storage key.
pub trait Keyed {
    fn key(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("entity with id {id} already exists")]
    AlreadyExists { id: String },
    #[error("entity with id {id} was not found")]
    NotFound { id: String },
}

#[derive(Debug)]
pub struct KeyedStore<E> {
    entries: RwLock<HashMap<String, E>>,
}

impl<E> Default for KeyedStore<E> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<E> KeyedStore<E>
where
    E: Keyed + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entity. Fails if its key is already taken.
    pub fn save(&self, entity: E) -> Result<E, StoreError> {
        let id = entity.key();
        let mut entries = self.entries.write();
        if entries.contains_key(&id) {
            return Err(StoreError::AlreadyExists { id });
        }
        entries.insert(id, entity.clone());
        Ok(entity)
    }

    pub fn find_by_id(&self, id: &str) -> Result<E, StoreError> {
        self.entries
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    pub fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Replace an existing entity. The existence check and the write happen under one
    /// exclusive lock.
    pub fn update(&self, entity: E) -> Result<E, StoreError> {
        let id = entity.key();
        let mut entries = self.entries.write();
        match entries.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(StoreError::NotFound { id }),
        }
    }

    /// Snapshot of every entity, in no particular order.
    pub fn list(&self) -> Vec<E> {
        self.entries.read().values().cloned().collect()
    }

    /// Snapshot of the entities matching `predicate`, in no particular order.
    pub fn query<P>(&self, mut predicate: P) -> Vec<E>
    where
        P: FnMut(&E) -> bool,
    {
        self.entries
            .read()
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
