//! Container metadata property store for zen* image codecs.
//!
//! This crate bridges a container format's metadata reader to a generic
//! property-store contract:
//!
//! - [`MetadataStore`] — the snapshot-backed store facade
//! - [`PropertyStorage`] / [`InitializeWithData`] / [`PropertyCapabilities`]
//!   — the three caller-facing contracts the store composes
//! - [`ContainerFormat`] / [`Container`] / [`MetadataReader`] — boundary
//!   traits a codec's container plumbing implements
//! - [`PropertyKey`] / [`PropertyValue`] — two-part property identity and
//!   the variant value model
//! - [`MappingEntry`] / [`PHOTO_SCHEMA`] — the fixed table binding keys to
//!   container query paths and a per-group writability flag
//!
//! A store is constructed over a container format, initialized once from
//! source bytes, and serves every later read from its in-memory snapshot:
//!
//! ```text
//! let mut store = MetadataStore::new(format);
//! store.initialize(&data, MetadataCaching::OnDemand)?;
//!
//! for i in 0..store.count()? {
//!     let key = store.key_at(i)?;
//!     // store.value(key) ...
//! }
//! ```
//!
//! Fields the container cannot answer are simply absent; partial metadata
//! is fine, a container that won't open is not. Writes are accepted into
//! the snapshot but never flushed back; [`commit`](MetadataStore::commit)
//! is an acknowledgement only.
//!
//! Pixel decoding, frame handling, and metadata-block parsing stay in the
//! codec crates; zenprops only queries whatever reader the container hands
//! it and re-exposes a fixed subset as typed key-value pairs.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod adapter;
mod cache;
mod capabilities;
mod key;
mod reader;
mod schema;
mod store;
mod traits;
mod value;

pub use adapter::pull;
pub use cache::PropertyCache;
pub use capabilities::{PropertyCapabilities, schema_writable};
pub use key::{PropertyGroup, PropertyKey};
pub use reader::{Container, ContainerFormat, MetadataCaching, MetadataReader};
pub use schema::{MappingEntry, PHOTO_SCHEMA, find_group, mapped};
pub use store::{MetadataStore, StoreError};
pub use traits::{InitializeWithData, PropertyStorage};
pub use value::{PropertyValue, ValueState};
