//! Container boundary traits.
//!
//! zenprops never parses a container itself. A codec's container plumbing
//! implements this trait family and the store pulls metadata through it
//! during initialization:
//!
//! ```text
//! ContainerFormat ──open(data, caching)──▶ Container
//!                                              │
//!                                   metadata_reader()
//!                                              ▼
//!                                     MetadataReader ──get_by_name(path)──▶ PropertyValue
//! ```
//!
//! Failures from `open` and `metadata_reader` are setup failures: the
//! store propagates them verbatim. Failures from `get_by_name` are
//! per-field and swallowed during population.

use crate::value::PropertyValue;

/// Metadata caching hint passed through to the container parser.
///
/// A parser that does not distinguish the two modes may ignore the hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MetadataCaching {
    /// Parse metadata blocks lazily, as queries arrive.
    #[default]
    OnDemand,
    /// Parse and cache every metadata block when the container opens.
    OnLoad,
}

/// A container source: opens a container over source bytes.
///
/// Implemented by each container format's plumbing (one per format, the
/// way codec config types implement their codec traits). `data` is only
/// borrowed for the call; the store never retains it.
pub trait ContainerFormat {
    /// Error for open and reader-acquisition failures.
    type Error: core::error::Error + Send + Sync + 'static;

    /// The opened container type.
    type Container: Container<Error = Self::Error>;

    /// Open a container over `data`.
    fn open(&self, data: &[u8], caching: MetadataCaching) -> Result<Self::Container, Self::Error>;
}

/// An opened container, able to hand out its metadata reader.
pub trait Container {
    /// Error for reader-acquisition failures.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Reader type, borrowing from the container.
    type Reader<'a>: MetadataReader
    where
        Self: 'a;

    /// Obtain the metadata reader.
    ///
    /// A container with no metadata support at all fails here; a container
    /// whose metadata simply matches nothing succeeds and lets every query
    /// miss.
    fn metadata_reader(&self) -> Result<Self::Reader<'_>, Self::Error>;
}

/// Query interface over a container's embedded metadata.
pub trait MetadataReader {
    /// Error for per-field lookup failures.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Look up the value at a query path.
    ///
    /// Path syntax is container-specific: hierarchical tags plus sequence
    /// markers, e.g. `/xmp/<xmpseq>dc:creator`. Unknown paths and type
    /// mismatches are errors; a structurally present field with no value is
    /// [`PropertyValue::Empty`]. Population treats all three the same way:
    /// the field is skipped.
    fn get_by_name(&self, path: &str) -> Result<PropertyValue, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use core::fmt;

    #[test]
    fn caching_defaults_to_on_demand() {
        assert_eq!(MetadataCaching::default(), MetadataCaching::OnDemand);
    }

    // Minimal end-to-end impl of the trait family.
    #[derive(Debug, PartialEq)]
    struct NoSuchPath(String);

    impl fmt::Display for NoSuchPath {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "no metadata at {}", self.0)
        }
    }

    impl core::error::Error for NoSuchPath {}

    struct OneFieldFormat;
    struct OneFieldContainer;
    struct OneFieldReader<'a> {
        _container: &'a OneFieldContainer,
    }

    impl ContainerFormat for OneFieldFormat {
        type Error = NoSuchPath;
        type Container = OneFieldContainer;

        fn open(
            &self,
            _data: &[u8],
            _caching: MetadataCaching,
        ) -> Result<OneFieldContainer, NoSuchPath> {
            Ok(OneFieldContainer)
        }
    }

    impl Container for OneFieldContainer {
        type Error = NoSuchPath;
        type Reader<'a>
            = OneFieldReader<'a>
        where
            Self: 'a;

        fn metadata_reader(&self) -> Result<OneFieldReader<'_>, NoSuchPath> {
            Ok(OneFieldReader { _container: self })
        }
    }

    impl MetadataReader for OneFieldReader<'_> {
        type Error = NoSuchPath;

        fn get_by_name(&self, path: &str) -> Result<PropertyValue, NoSuchPath> {
            if path == "/xmp/dc:title" {
                Ok(PropertyValue::from("Hello"))
            } else {
                Err(NoSuchPath(String::from(path)))
            }
        }
    }

    #[test]
    fn family_round_trip() {
        let container = OneFieldFormat
            .open(b"bytes", MetadataCaching::OnDemand)
            .unwrap();
        let reader = container.metadata_reader().unwrap();
        assert_eq!(
            reader.get_by_name("/xmp/dc:title").unwrap().as_str(),
            Some("Hello")
        );
        assert!(reader.get_by_name("/xmp/dc:rights").is_err());
    }
}
