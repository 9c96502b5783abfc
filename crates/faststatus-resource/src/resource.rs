use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResourceError;
use crate::status::Status;

/// Identifier for a tracked resource.
///
/// A `ResourceId` is a plain 64-bit value with three textual conventions,
/// which must never be mixed:
///
/// - **display form** (`Display`): fixed-width 16-digit uppercase hex,
///   zero-padded — the form used inside the line-text record;
/// - **wire form** ([`ResourceId::to_hex`]): uppercase hex without padding —
///   the JSON field value, chosen so a 64-bit id round-trips exactly through
///   text-based transports;
/// - **storage-key form**: lowercase hex without padding, derived by the
///   store layer (see `faststatus-store`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Wrap a raw 64-bit identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Parse from a hex string. Case-insensitive; no `0x` prefix, no sign.
    pub fn from_hex(s: &str) -> Result<Self, ResourceError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ResourceError::ParseError(s.to_string()));
        }
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| ResourceError::ParseError(s.to_string()))
    }

    /// The wire form: uppercase hex, no padding (`"0"` for id 0).
    pub fn to_hex(self) -> String {
        format!("{:X}", self.0)
    }
}

/// The canonical display form: 16-digit zero-padded uppercase hex.
impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<ResourceId> for u64 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

/// Wire serialization: uppercase hex string, no padding, no `0x`.
impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Wire deserialization: hex string; an empty string reads as id 0.
impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::new(0));
        }
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Any resource (a person, a meeting room, a build machine) that needs to
/// communicate how busy it is.
///
/// A `Resource` is a plain value: the `(id, friendly_name, status, since)`
/// tuple fully determines its serialized form, and there is no shared
/// mutable state — holders may copy it freely.
///
/// The structured (JSON) form supports partial input: absent fields keep
/// their zero value (empty name, `FREE`, Unix epoch), and an absent or empty
/// id reads as 0. Decoding is atomic: a failure anywhere leaves the caller's
/// existing value untouched, because no `Resource` is produced at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Stable identifier; its lowercase hex form doubles as the storage key.
    #[serde(default)]
    pub id: ResourceId,
    /// Free-form display name. No uniqueness constraint.
    #[serde(default)]
    pub friendly_name: String,
    /// Current occupancy status.
    #[serde(default)]
    pub status: Status,
    /// When the resource entered its current status (UTC).
    #[serde(default)]
    pub since: DateTime<Utc>,
}

impl Resource {
    /// Create a resource with the given identity: status `FREE`, `since` at
    /// the zero timestamp.
    pub fn new(id: ResourceId, friendly_name: impl Into<String>) -> Self {
        Self {
            id,
            friendly_name: friendly_name.into(),
            ..Self::default()
        }
    }

    /// Move the resource into `status` as of `since`.
    ///
    /// The two fields must change together for `since` to keep meaning "when
    /// the resource entered its current status". Direct field writes remain
    /// possible; the pairing is a caller contract, not an enforced invariant.
    pub fn set_status(&mut self, status: Status, since: DateTime<Utc>) {
        self.status = status;
        self.since = since;
    }
}

/// The line-text form, optimized for line-oriented tools: one resource per
/// line, lexicographically sortable by timestamp.
///
/// ```text
/// 2006-01-02T15:04:05Z 1 0123456789ABCDEF My Resource
/// ```
impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.since.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.status,
            self.id,
            self.friendly_name
        )
    }
}
