//! The store facade.

use core::fmt;

use crate::adapter;
use crate::cache::PropertyCache;
use crate::capabilities::{PropertyCapabilities, schema_writable};
use crate::key::PropertyKey;
use crate::reader::{Container, ContainerFormat, MetadataCaching};
use crate::schema::{self, MappingEntry, PHOTO_SCHEMA};
use crate::traits::{InitializeWithData, PropertyStorage};
use crate::value::{PropertyValue, ValueState};

/// Error from the property-store surface.
///
/// Setup failures during initialization are not represented here;
/// [`MetadataStore::initialize`] propagates the container format's own
/// error verbatim instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// An accessor ran before [`MetadataStore::initialize`]. A contract
    /// violation by the caller, not a recoverable condition.
    Uninitialized,
    /// The snapshot holds no value for the requested key.
    NotFound(PropertyKey),
    /// Enumeration index past the populated entry count.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Populated entry count.
        count: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("store is not initialized"),
            Self::NotFound(key) => write!(f, "no value for property {key}"),
            Self::IndexOutOfRange { index, count } => {
                write!(f, "index {index} past entry count {count}")
            }
        }
    }
}

impl core::error::Error for StoreError {}

/// Snapshot-backed metadata property store over a container format.
///
/// The store has two states. It is created uninitialized (no cache, every
/// accessor failing with [`StoreError::Uninitialized`]) and becomes ready
/// when [`initialize`](Self::initialize) opens the container, pulls every
/// recognized field through its metadata reader, and snapshots the result.
/// From then on all reads are served from the snapshot; the container and
/// the source bytes are gone.
///
/// ```text
/// let mut store = MetadataStore::new(format);
/// store.initialize(&data, MetadataCaching::OnDemand)?;
///
/// for i in 0..store.count()? {
///     let key = store.key_at(i)?;
///     // store.value(key) ...
/// }
/// ```
///
/// Writability questions ([`is_property_writable`](Self::is_property_writable))
/// are answered from the mapping table alone and work in either state.
///
/// Single-threaded by design: no internal locking, so callers must not run
/// `initialize` concurrently with anything else on the same store.
#[derive(Clone, Debug)]
pub struct MetadataStore<F> {
    format: F,
    schema: &'static [MappingEntry],
    cache: Option<PropertyCache>,
}

impl<F: ContainerFormat> MetadataStore<F> {
    /// Create an uninitialized store over `format` with the built-in
    /// [`PHOTO_SCHEMA`] mapping table.
    pub fn new(format: F) -> Self {
        Self {
            format,
            schema: PHOTO_SCHEMA,
            cache: None,
        }
    }

    /// Replace the mapping table.
    pub fn with_schema(mut self, schema: &'static [MappingEntry]) -> Self {
        self.schema = schema;
        self
    }

    /// The mapping table in use.
    pub fn schema(&self) -> &'static [MappingEntry] {
        self.schema
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_ready(&self) -> bool {
        self.cache.is_some()
    }

    /// Open `data` as a container and snapshot its recognized metadata.
    ///
    /// Setup failures (the container won't open, or yields no metadata
    /// reader) propagate verbatim and leave the store uninitialized.
    /// Per-field misses are skipped, so a container contributing no
    /// recognized metadata still initializes successfully with a count of
    /// zero.
    ///
    /// `data` is only borrowed for this call. A second call discards the
    /// previous snapshot and rebuilds, writes included.
    pub fn initialize(&mut self, data: &[u8], caching: MetadataCaching) -> Result<(), F::Error> {
        let container = self.format.open(data, caching)?;
        let reader = container.metadata_reader()?;

        let mut cache = PropertyCache::new();
        for (key, value) in adapter::pull(&reader, self.schema) {
            cache.set(key, value, ValueState::Normal);
        }
        log::debug!(
            "snapshot holds {} of {} mapped properties",
            cache.len(),
            schema::mapped(self.schema).count()
        );
        self.cache = Some(cache);
        Ok(())
    }

    fn snapshot(&self) -> Result<&PropertyCache, StoreError> {
        self.cache.as_ref().ok_or(StoreError::Uninitialized)
    }

    /// Number of populated entries.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.snapshot()?.len())
    }

    /// Key at `index`, in population-then-write order.
    pub fn key_at(&self, index: usize) -> Result<PropertyKey, StoreError> {
        let cache = self.snapshot()?;
        cache.key_at(index).ok_or(StoreError::IndexOutOfRange {
            index,
            count: cache.len(),
        })
    }

    /// Value for `key` from the snapshot.
    pub fn value(&self, key: PropertyKey) -> Result<&PropertyValue, StoreError> {
        self.snapshot()?.get(key).ok_or(StoreError::NotFound(key))
    }

    /// State tag for `key`: pulled from the source, or written after.
    pub fn state(&self, key: PropertyKey) -> Result<ValueState, StoreError> {
        self.snapshot()?.state(key).ok_or(StoreError::NotFound(key))
    }

    /// Write `value` into the snapshot.
    ///
    /// Accepted regardless of the writability policy: the policy gates
    /// what a caller should attempt, not what the cache holds. Accepted
    /// for keys the source never provided. Never flushed back.
    pub fn set_value(&mut self, key: PropertyKey, value: PropertyValue) -> Result<(), StoreError> {
        let cache = self.cache.as_mut().ok_or(StoreError::Uninitialized)?;
        cache.set(key, value, ValueState::Modified);
        Ok(())
    }

    /// Acknowledge writes.
    ///
    /// Always succeeds and persists nothing: this store is read-mostly,
    /// and writes stay in the snapshot. Safe to call any number of times,
    /// in either state.
    pub fn commit(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Writability of `key`, valid in either state.
    pub fn is_property_writable(&self, key: PropertyKey) -> bool {
        schema_writable(self.schema, key)
    }
}

impl<F: ContainerFormat + Default> Default for MetadataStore<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: ContainerFormat> PropertyStorage for MetadataStore<F> {
    type Error = StoreError;

    fn count(&self) -> Result<usize, StoreError> {
        MetadataStore::count(self)
    }

    fn key_at(&self, index: usize) -> Result<PropertyKey, StoreError> {
        MetadataStore::key_at(self, index)
    }

    fn value(&self, key: PropertyKey) -> Result<&PropertyValue, StoreError> {
        MetadataStore::value(self, key)
    }

    fn set_value(&mut self, key: PropertyKey, value: PropertyValue) -> Result<(), StoreError> {
        MetadataStore::set_value(self, key, value)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        MetadataStore::commit(self)
    }
}

impl<F: ContainerFormat> InitializeWithData for MetadataStore<F> {
    type Error = F::Error;

    fn initialize(&mut self, data: &[u8], caching: MetadataCaching) -> Result<(), F::Error> {
        MetadataStore::initialize(self, data, caching)
    }
}

impl<F: ContainerFormat> PropertyCapabilities for MetadataStore<F> {
    fn is_property_writable(&self, key: PropertyKey) -> bool {
        MetadataStore::is_property_writable(self, key)
    }
}
