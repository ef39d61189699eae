//! Per-property writability policy.

use crate::key::PropertyKey;
use crate::schema::{self, MappingEntry};

/// Capability extension contract: whether a property accepts writes.
///
/// Answers are fixed by the mapping table and independent of store state:
/// a property can be non-writable while holding a cached value, and the
/// question is valid before initialization ever runs.
pub trait PropertyCapabilities {
    /// Whether the store permits writing `key`.
    fn is_property_writable(&self, key: PropertyKey) -> bool;
}

/// Writability of `key` under `schema`.
///
/// Matches on the format-group half of the key only; writability is
/// granted per group, not per exact field. Keys in no known group are
/// never writable.
///
/// # Example
///
/// ```
/// use zenprops::{schema_writable, PropertyGroup, PropertyKey, PHOTO_SCHEMA};
///
/// assert!(!schema_writable(PHOTO_SCHEMA, PropertyKey::TITLE));
///
/// let unknown = PropertyKey::new(PropertyGroup::new(0x1234), 1);
/// assert!(!schema_writable(PHOTO_SCHEMA, unknown));
/// ```
pub fn schema_writable(schema: &[MappingEntry], key: PropertyKey) -> bool {
    schema::find_group(schema, key).is_some_and(|entry| entry.writable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PropertyGroup;
    use crate::schema::PHOTO_SCHEMA;

    static MIXED: &[MappingEntry] = &[
        MappingEntry::new(PropertyKey::TITLE).with_query("/xmp/dc:title"),
        MappingEntry::new(PropertyKey::RATING)
            .with_query("/xmp/xmp:Rating")
            .with_writable(true),
    ];

    #[test]
    fn shipped_schema_denies_everything() {
        assert!(!schema_writable(PHOTO_SCHEMA, PropertyKey::TITLE));
        assert!(!schema_writable(PHOTO_SCHEMA, PropertyKey::RATING));
        assert!(!schema_writable(PHOTO_SCHEMA, PropertyKey::CAMERA_MODEL));
    }

    #[test]
    fn grant_covers_the_whole_group() {
        // COPYRIGHT shares RATING's group; the flag applies to both.
        assert!(schema_writable(MIXED, PropertyKey::RATING));
        assert!(schema_writable(MIXED, PropertyKey::COPYRIGHT));
        assert!(!schema_writable(MIXED, PropertyKey::TITLE));
    }

    #[test]
    fn unknown_groups_are_denied() {
        let unknown = PropertyKey::new(PropertyGroup::new(0xFEED), 9);
        assert!(!schema_writable(MIXED, unknown));
        assert!(!schema_writable(&[], unknown));
    }
}
