//! Key derivation and the persisted record format.
//!
//! Every backend stores the same representation: the key is the resource
//! id in lowercase unpadded hex, the value is the structured JSON form of
//! the resource, byte for byte. A record written by one backend (or read
//! straight off the database file) is therefore meaningful to any other.

use faststatus_resource::{Resource, ResourceId};

use crate::error::{StoreError, StoreResult};

/// Derive the storage key for a resource id: lowercase hex, no padding,
/// no `0x` prefix (`"0"` for id 0).
///
/// Distinct from both the display form (zero-padded uppercase) and the
/// JSON wire form (unpadded uppercase). Keys sort bytewise by length
/// first, not numerically; callers that need numeric order sort decoded
/// records instead.
pub fn resource_key(id: ResourceId) -> String {
    format!("{:x}", id.as_u64())
}

/// Serialize a resource into its persisted form.
///
/// Fails if the resource cannot be represented in the structured form,
/// which keeps unrepresentable values (an out-of-range status byte) from
/// ever reaching a backend.
pub(crate) fn encode(resource: &Resource) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(resource).map_err(|source| StoreError::Encode {
        id: resource.id,
        source,
    })
}

/// Deserialize a persisted record, reporting the offending key on failure.
pub(crate) fn decode(key: &str, bytes: &[u8]) -> StoreResult<Resource> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::Decode {
        key: key.to_string(),
        source,
    })
}
