//! Caller-facing store contracts.
//!
//! Three independent interfaces compose the store surface: the keyed
//! property set ([`PropertyStorage`]), the one-shot setup entry point
//! ([`InitializeWithData`]), and the writability extension
//! ([`PropertyCapabilities`](crate::PropertyCapabilities)). A concrete
//! store implements all three; callers depend only on the ones they use.

use crate::key::PropertyKey;
use crate::reader::MetadataCaching;
use crate::value::PropertyValue;

/// Generic keyed property set: read, enumerate, write, flush.
///
/// Implementations are snapshot-oriented: reads reflect whatever the
/// store holds, and enumeration order is stable across calls.
pub trait PropertyStorage {
    /// The store-specific error type.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Number of populated entries.
    fn count(&self) -> Result<usize, Self::Error>;

    /// Key at `index`. Order is stable: first population, then first
    /// write, never rearranged.
    fn key_at(&self, index: usize) -> Result<PropertyKey, Self::Error>;

    /// Value for `key`.
    fn value(&self, key: PropertyKey) -> Result<&PropertyValue, Self::Error>;

    /// Insert or overwrite the value for `key`.
    fn set_value(&mut self, key: PropertyKey, value: PropertyValue) -> Result<(), Self::Error>;

    /// Flush pending writes to the backing source, where the
    /// implementation supports that at all.
    fn commit(&mut self) -> Result<(), Self::Error>;
}

/// One-shot setup from source bytes.
///
/// Kept separate from [`PropertyStorage`] so a caller can construct a
/// store first and hand it bytes later.
pub trait InitializeWithData {
    /// The setup error type.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Initialize from `data`, with `caching` as a parser hint.
    fn initialize(&mut self, data: &[u8], caching: MetadataCaching) -> Result<(), Self::Error>;
}
