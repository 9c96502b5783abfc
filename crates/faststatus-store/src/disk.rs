use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use faststatus_resource::{Resource, ResourceId};

use crate::codec::{decode, encode, resource_key};
use crate::error::StoreResult;
use crate::traits::ResourceStore;

/// The single table holding all resource records: lowercase-hex id key,
/// structured JSON value.
const RESOURCES: TableDefinition<&str, &[u8]> = TableDefinition::new("resources");

/// Disk-backed resource store on a single [redb](https://docs.rs/redb) file.
///
/// Writes go through ACID transactions, so a crash mid-write leaves either
/// the old record or the new one, never a torn mix. Reads run on their own
/// snapshot and never block writers.
pub struct RedbResourceStore {
    db: Database,
}

impl RedbResourceStore {
    /// Open the database at `path`, creating the file if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let db = Database::create(path)?;

        // Create the table up front so reads on a fresh database find an
        // empty table instead of failing with TableDoesNotExist.
        let txn = db.begin_write()?;
        txn.open_table(RESOURCES)?;
        txn.commit()?;

        debug!(path = %path.display(), "opened resource database");
        Ok(Self { db })
    }
}

impl ResourceStore for RedbResourceStore {
    fn get(&self, id: ResourceId) -> StoreResult<Option<Resource>> {
        let key = resource_key(id);
        let txn = self.db.begin_read()?;
        let table = txn.open_table(RESOURCES)?;
        match table.get(key.as_str())? {
            Some(guard) => Ok(Some(decode(&key, guard.value())?)),
            None => Ok(None),
        }
    }

    fn put(&self, resource: &Resource) -> StoreResult<()> {
        // Encode before the transaction: a rejected resource must leave
        // the previous record untouched.
        let value = encode(resource)?;
        let key = resource_key(resource.id);
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(RESOURCES)?;
            table.insert(key.as_str(), value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn delete(&self, id: ResourceId) -> StoreResult<bool> {
        let key = resource_key(id);
        let txn = self.db.begin_write()?;
        let existed;
        {
            let mut table = txn.open_table(RESOURCES)?;
            existed = table.remove(key.as_str())?.is_some();
        }
        txn.commit()?;
        Ok(existed)
    }

    /// Single read transaction for the whole batch, so the results are a
    /// consistent snapshot even while writes land concurrently.
    fn get_many(&self, ids: &[ResourceId]) -> StoreResult<Vec<Option<Resource>>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(RESOURCES)?;
        ids.iter()
            .map(|&id| {
                let key = resource_key(id);
                match table.get(key.as_str())? {
                    Some(guard) => Ok(Some(decode(&key, guard.value())?)),
                    None => Ok(None),
                }
            })
            .collect()
    }

    fn list(&self) -> StoreResult<Vec<Resource>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(RESOURCES)?;
        let mut resources = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            resources.push(decode(key.value(), value.value())?);
        }
        // Keys order bytewise ("10" < "f"); resources order numerically.
        resources.sort_by_key(|resource| resource.id);
        Ok(resources)
    }
}

impl std::fmt::Debug for RedbResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbResourceStore").finish_non_exhaustive()
    }
}
