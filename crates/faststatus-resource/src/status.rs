use std::fmt;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResourceError;

/// How busy a resource is, on a closed scale from 0 to 2.
///
/// `0` ([`Status::FREE`]) is a completely unoccupied resource, `2`
/// ([`Status::OCCUPIED`]) is completely occupied, and `1` ([`Status::BUSY`])
/// is anything in between. The simplicity of the scheme lets it cover any
/// kind of resource — a person, a meeting room, a build machine.
///
/// The representation is a transparent wrapper over the raw wire byte, so
/// out-of-range bit patterns remain representable. The two text renderers
/// treat such values as `FREE` and never fail; the serde paths reject them.
/// This asymmetry is deliberate: human-facing output prefers a sane fallback
/// over a crash, while persisted and wire representations must never encode
/// invalid data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status(u8);

/// Pretty names for the three valid statuses, indexed by raw value.
const STATUS_NAMES: [&str; 3] = ["Free", "Busy", "Occupied"];

impl Status {
    /// A completely unoccupied resource. The zero value.
    pub const FREE: Status = Status(0);
    /// A resource that is neither free nor completely occupied.
    pub const BUSY: Status = Status(1);
    /// A completely occupied resource.
    pub const OCCUPIED: Status = Status(2);

    /// Wrap a raw byte without range-checking.
    ///
    /// For display and diagnostic paths that rely on the lenient render
    /// fallback. Wire and storage paths decode through [`TryFrom<u8>`],
    /// which rejects out-of-range values.
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw wire byte, unclamped.
    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// The human-readable name: `"Free"`, `"Busy"`, or `"Occupied"`.
    ///
    /// Display-only; never use it where the compact numeric form is
    /// expected. Out-of-range values render as `"Free"`. Never fails.
    pub fn pretty(self) -> &'static str {
        STATUS_NAMES[self.clamped().0 as usize]
    }

    fn in_range(self) -> bool {
        self.0 <= Self::OCCUPIED.0
    }

    /// The valid status this value reads as: itself when in range, `FREE`
    /// otherwise.
    fn clamped(self) -> Self {
        if self.in_range() {
            self
        } else {
            Self::FREE
        }
    }
}

impl TryFrom<u8> for Status {
    type Error = ResourceError;

    /// Decode a status from its raw wire byte.
    ///
    /// Values outside `0..=2` fail with [`ResourceError::OutOfRange`]. The
    /// decode is by-value: on failure nothing is committed, so a caller never
    /// ends up holding an out-of-range status — the canonical repair value is
    /// [`Status::default`] (`FREE`).
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        let status = Status(raw);
        if !status.in_range() {
            return Err(ResourceError::OutOfRange(raw));
        }
        Ok(status)
    }
}

/// The compact numeric form used in API and line-oriented output: `"0"`,
/// `"1"`, or `"2"`. Out-of-range values render as `"0"`; never fails. Use
/// [`Status::pretty`] for the human-readable name.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clamped().0)
    }
}

/// Strict numeric serialization. An out-of-range value fails with
/// [`ResourceError::OutOfRange`] rather than laundering invalid data into
/// storage or onto the wire.
impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.in_range() {
            return Err(ser::Error::custom(ResourceError::OutOfRange(self.0)));
        }
        serializer.serialize_u8(self.0)
    }
}

/// Strict numeric deserialization, mirroring the [`TryFrom<u8>`] contract.
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Status::try_from(raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_in_range_values() {
        assert_eq!(Status::try_from(0).unwrap(), Status::FREE);
        assert_eq!(Status::try_from(1).unwrap(), Status::BUSY);
        assert_eq!(Status::try_from(2).unwrap(), Status::OCCUPIED);
    }

    #[test]
    fn decode_out_of_range_fails() {
        for raw in [3u8, 7, 100, 255] {
            assert_eq!(Status::try_from(raw), Err(ResourceError::OutOfRange(raw)));
        }
    }

    #[test]
    fn default_is_free() {
        assert_eq!(Status::default(), Status::FREE);
    }

    #[test]
    fn compact_render() {
        assert_eq!(Status::FREE.to_string(), "0");
        assert_eq!(Status::BUSY.to_string(), "1");
        assert_eq!(Status::OCCUPIED.to_string(), "2");
    }

    #[test]
    fn compact_render_clamps_out_of_range() {
        // The renderer never fails: anything outside the range reads as Free.
        for raw in [3u8, 42, 255] {
            assert_eq!(Status::from_raw(raw).to_string(), "0");
        }
    }

    #[test]
    fn pretty_render() {
        assert_eq!(Status::FREE.pretty(), "Free");
        assert_eq!(Status::BUSY.pretty(), "Busy");
        assert_eq!(Status::OCCUPIED.pretty(), "Occupied");
    }

    #[test]
    fn pretty_render_clamps_out_of_range() {
        for raw in [3u8, 42, 255] {
            assert_eq!(Status::from_raw(raw).pretty(), "Free");
        }
    }

    #[test]
    fn raw_accessor_preserves_bit_pattern() {
        assert_eq!(Status::from_raw(200).as_raw(), 200);
    }

    #[test]
    fn serialize_emits_bare_number() {
        assert_eq!(serde_json::to_string(&Status::BUSY).unwrap(), "1");
    }

    #[test]
    fn serialize_out_of_range_fails() {
        let err = serde_json::to_string(&Status::from_raw(9)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn deserialize_in_range() {
        let cases = [("0", Status::FREE), ("1", Status::BUSY), ("2", Status::OCCUPIED)];
        for (json, expected) in cases {
            assert_eq!(serde_json::from_str::<Status>(json).unwrap(), expected);
        }
    }

    #[test]
    fn deserialize_out_of_range_fails() {
        let err = serde_json::from_str::<Status>("3").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn deserialize_rejects_non_numeric() {
        assert!(serde_json::from_str::<Status>("\"1\"").is_err());
        assert!(serde_json::from_str::<Status>("1.5").is_err());
        assert!(serde_json::from_str::<Status>("-1").is_err());
        assert!(serde_json::from_str::<Status>("300").is_err());
    }

    #[test]
    fn serde_roundtrip_all_valid_values() {
        for status in [Status::FREE, Status::BUSY, Status::OCCUPIED] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), status);
        }
    }
}
