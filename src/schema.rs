//! The fixed metadata mapping table.
//!
//! A schema is an ordered `&'static [MappingEntry]`: small, immutable,
//! known at compile time, and queried only by full scan. No registration
//! mechanism exists or is needed.

use crate::key::PropertyKey;

/// One row of a metadata mapping table.
///
/// Binds an output [`PropertyKey`] to the container-side query path used
/// to pull its value, plus a fixed writability flag. An entry without a
/// query path exists for writability bookkeeping only and is skipped
/// during population.
///
/// # Example
///
/// ```
/// use zenprops::{MappingEntry, PropertyKey};
///
/// static SCHEMA: &[MappingEntry] = &[
///     MappingEntry::new(PropertyKey::TITLE).with_query("/xmp/dc:title"),
///     MappingEntry::new(PropertyKey::RATING)
///         .with_query("/xmp/xmp:Rating")
///         .with_writable(true),
///     MappingEntry::new(PropertyKey::BIT_DEPTH),
/// ];
///
/// assert_eq!(SCHEMA[0].query(), Some("/xmp/dc:title"));
/// assert!(SCHEMA[1].writable());
/// assert_eq!(SCHEMA[2].query(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingEntry {
    key: PropertyKey,
    query: Option<&'static str>,
    writable: bool,
}

impl MappingEntry {
    /// Create a query-less, non-writable entry for `key`.
    pub const fn new(key: PropertyKey) -> Self {
        Self {
            key,
            query: None,
            writable: false,
        }
    }

    /// Set the container query path.
    pub const fn with_query(mut self, query: &'static str) -> Self {
        self.query = Some(query);
        self
    }

    /// Set the writability flag.
    pub const fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// The output property identity.
    pub const fn key(&self) -> PropertyKey {
        self.key
    }

    /// The container query path, if the entry is mapped.
    pub const fn query(&self) -> Option<&'static str> {
        self.query
    }

    /// Whether fields in this entry's group accept writes.
    pub const fn writable(&self) -> bool {
        self.writable
    }
}

/// The photo metadata table the store ships with.
///
/// Query paths use the container's metadata addressing syntax: hierarchical
/// XMP tag paths, `<xmpseq>` marking a sequence container, and raw IFD tag
/// addressing for the one field stored EXIF-side. The geometry entries
/// carry no query path; they are writability bookkeeping only.
pub static PHOTO_SCHEMA: &[MappingEntry] = &[
    MappingEntry::new(PropertyKey::TITLE).with_query("/xmp/dc:title"),
    MappingEntry::new(PropertyKey::COPYRIGHT).with_query("/xmp/dc:rights"),
    MappingEntry::new(PropertyKey::AUTHOR).with_query("/xmp/<xmpseq>dc:creator"),
    MappingEntry::new(PropertyKey::SUBJECT).with_query("/ifd/{ushort=40095}"),
    MappingEntry::new(PropertyKey::BIT_DEPTH),
    MappingEntry::new(PropertyKey::HORIZONTAL_SIZE),
    MappingEntry::new(PropertyKey::VERTICAL_SIZE),
    MappingEntry::new(PropertyKey::RATING).with_query("/xmp/xmp:Rating"),
    MappingEntry::new(PropertyKey::CAMERA_MODEL).with_query("/xmp/tiff:Model"),
    MappingEntry::new(PropertyKey::CAMERA_MANUFACTURER).with_query("/xmp/tiff:make"),
];

/// Entries with a query path, in table order.
pub fn mapped(schema: &[MappingEntry]) -> impl Iterator<Item = &MappingEntry> {
    schema.iter().filter(|entry| entry.query.is_some())
}

/// First entry whose key shares `key`'s format group.
///
/// The group-only match is deliberate: writability is granted per format
/// group, not per exact field.
pub fn find_group(schema: &[MappingEntry], key: PropertyKey) -> Option<&MappingEntry> {
    schema.iter().find(|entry| entry.key.same_group(key))
}
