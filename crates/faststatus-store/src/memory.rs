use std::collections::HashMap;
use std::sync::RwLock;

use faststatus_resource::{Resource, ResourceId};

use crate::codec::{decode, encode, resource_key};
use crate::error::StoreResult;
use crate::traits::ResourceStore;

/// In-memory, HashMap-based resource store.
///
/// Intended for tests and embedding. Records are held behind a `RwLock`
/// for safe concurrent access, in the same encoded form the disk backend
/// persists, so the two backends accept and reject exactly the same
/// values.
pub struct InMemoryResourceStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryResourceStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of resources currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn get(&self, id: ResourceId) -> StoreResult<Option<Resource>> {
        let key = resource_key(id);
        let map = self.records.read().expect("lock poisoned");
        match map.get(&key) {
            Some(bytes) => Ok(Some(decode(&key, bytes)?)),
            None => Ok(None),
        }
    }

    fn put(&self, resource: &Resource) -> StoreResult<()> {
        // Encode before taking the lock: a rejected resource must leave
        // the previous record untouched.
        let bytes = encode(resource)?;
        let mut map = self.records.write().expect("lock poisoned");
        map.insert(resource_key(resource.id), bytes);
        Ok(())
    }

    fn delete(&self, id: ResourceId) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        Ok(map.remove(&resource_key(id)).is_some())
    }

    fn list(&self) -> StoreResult<Vec<Resource>> {
        let map = self.records.read().expect("lock poisoned");
        let mut resources = map
            .iter()
            .map(|(key, bytes)| decode(key, bytes))
            .collect::<StoreResult<Vec<_>>>()?;
        resources.sort_by_key(|resource| resource.id);
        Ok(resources)
    }
}

impl std::fmt::Debug for InMemoryResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryResourceStore")
            .field("resource_count", &count)
            .finish()
    }
}
