//! Population: resolving mapping-table entries against a metadata reader.

use alloc::vec::Vec;

use crate::key::PropertyKey;
use crate::reader::MetadataReader;
use crate::schema::MappingEntry;
use crate::value::PropertyValue;

/// Resolve each mapped table entry against `reader`.
///
/// Returns `(key, value)` pairs in table order for every entry whose query
/// produced a non-empty value. Per-field failures (unknown path, wrong
/// type, empty value) skip the entry rather than failing the pull:
/// partial metadata is acceptable. A broken container is not, but that is
/// caught before a reader ever reaches this function.
pub fn pull<R: MetadataReader>(
    reader: &R,
    schema: &[MappingEntry],
) -> Vec<(PropertyKey, PropertyValue)> {
    let mut pulled = Vec::new();
    for entry in schema {
        let Some(path) = entry.query() else { continue };
        match reader.get_by_name(path) {
            Ok(value) if !value.is_empty() => pulled.push((entry.key(), value)),
            Ok(_) => log::trace!("{} empty at {path}, skipped", entry.key()),
            Err(err) => log::trace!("{} unavailable at {path}: {err}", entry.key()),
        }
    }
    pulled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PropertyGroup;
    use crate::schema::PHOTO_SCHEMA;
    use alloc::string::String;
    use core::fmt;

    #[derive(Debug)]
    struct Miss;

    impl fmt::Display for Miss {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("path not found")
        }
    }

    impl core::error::Error for Miss {}

    /// Reader over a fixed path → value list. An empty string stands in
    /// for a structurally present field with no value.
    struct FixedReader(&'static [(&'static str, &'static str)]);

    impl MetadataReader for FixedReader {
        type Error = Miss;

        fn get_by_name(&self, path: &str) -> Result<PropertyValue, Miss> {
            match self.0.iter().find(|(p, _)| *p == path) {
                Some((_, "")) => Ok(PropertyValue::Empty),
                Some((_, v)) => Ok(PropertyValue::Str(String::from(*v))),
                None => Err(Miss),
            }
        }
    }

    #[test]
    fn pulls_in_table_order() {
        let reader = FixedReader(&[
            ("/xmp/tiff:make", "Canon"),
            ("/xmp/dc:title", "Hello"),
        ]);
        let pulled = pull(&reader, PHOTO_SCHEMA);
        assert_eq!(pulled.len(), 2);
        // Table order, not reader order: title row precedes make row.
        assert_eq!(pulled[0].0, PropertyKey::TITLE);
        assert_eq!(pulled[1].0, PropertyKey::CAMERA_MANUFACTURER);
    }

    #[test]
    fn misses_and_empties_are_skipped() {
        let reader = FixedReader(&[
            ("/xmp/dc:title", "Hello"),
            ("/xmp/xmp:Rating", ""),
        ]);
        let pulled = pull(&reader, PHOTO_SCHEMA);
        assert_eq!(pulled.len(), 1);
        assert_eq!(pulled[0].0, PropertyKey::TITLE);
    }

    #[test]
    fn queryless_entries_never_reach_the_reader() {
        struct PanicReader;

        impl MetadataReader for PanicReader {
            type Error = Miss;

            fn get_by_name(&self, path: &str) -> Result<PropertyValue, Miss> {
                // Only mapped paths may arrive here.
                assert!(path.starts_with('/'));
                Err(Miss)
            }
        }

        static BOOKKEEPING_ONLY: &[MappingEntry] = &[
            MappingEntry::new(PropertyKey::BIT_DEPTH),
            MappingEntry::new(PropertyKey::new(PropertyGroup::new(0x77), 1)),
        ];
        assert!(pull(&PanicReader, BOOKKEEPING_ONLY).is_empty());
    }

    #[test]
    fn nothing_recognized_is_not_an_error() {
        let reader = FixedReader(&[]);
        assert!(pull(&reader, PHOTO_SCHEMA).is_empty());
    }
}
