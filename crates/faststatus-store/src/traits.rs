use faststatus_resource::{Resource, ResourceId};

use crate::error::StoreResult;

/// Keyed store of resource records.
///
/// All implementations must satisfy these invariants:
/// - Records are keyed by the resource id alone; writing a resource whose
///   id is already present replaces the previous record.
/// - The persisted representation is the resource's structured JSON form,
///   byte for byte, under the lowercase-hex key.
/// - A resource that cannot be serialized (out-of-range status) is
///   rejected whole; a failed write leaves the previous record in place.
/// - All storage errors are propagated, never silently ignored.
pub trait ResourceStore: Send + Sync {
    /// Read the resource with the given id.
    ///
    /// Returns `Ok(None)` if no record exists for the id.
    /// Returns `Err` on storage failure or a corrupt record.
    fn get(&self, id: ResourceId) -> StoreResult<Option<Resource>>;

    /// Write a resource, replacing any previous record with the same id.
    fn put(&self, resource: &Resource) -> StoreResult<()>;

    /// Delete the record for `id`. Returns `true` if a record existed.
    fn delete(&self, id: ResourceId) -> StoreResult<bool>;

    /// Read several resources in one call, preserving input order.
    ///
    /// Missing ids yield `None` in the corresponding position. The default
    /// implementation calls `get()` per id; backends may override to use a
    /// single read transaction.
    fn get_many(&self, ids: &[ResourceId]) -> StoreResult<Vec<Option<Resource>>> {
        ids.iter().map(|&id| self.get(id)).collect()
    }

    /// Read every stored resource, ordered by ascending id.
    fn list(&self) -> StoreResult<Vec<Resource>>;
}
