use faststatus_resource::ResourceId;

/// Errors from resource store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The resource could not be serialized for storage (for instance
    /// because its status byte is out of range).
    #[error("failed to encode resource {id} for storage")]
    Encode {
        id: ResourceId,
        #[source]
        source: serde_json::Error,
    },

    /// The record at `key` does not decode as a resource (data corruption,
    /// or a record written by an incompatible version).
    #[error("corrupt record at key {key:?}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The database file could not be created or opened.
    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// A transaction could not be started.
    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// The resources table could not be opened.
    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    /// Low-level storage failure during a read or write.
    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    /// A write transaction failed to commit.
    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
