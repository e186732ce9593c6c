//! # Storage Layer
//!
//! This module defines the storage abstraction for shelter. The [`CatalogStore`]
//! trait lets the catalog work with different storage backends.
//!
//! ## Whole-Catalog Persistence
//!
//! The catalog is small (tens of records) and used by one process at a time,
//! so it is persisted as a single blob that is rewritten in full on every
//! save. There is no index, no append log and no locking.
//!
//! ## Load Policy
//!
//! [`CatalogStore::load`] never leaves the caller without a catalog when the
//! data itself is the problem:
//!
//! 1. **Missing blob**: seed the default catalog and persist it immediately,
//!    so later loads read the same records back.
//! 2. **Undecodable blob**: discard it, fall back to the seed and overwrite
//!    the blob with it (repair-on-read).
//! 3. **Anything else** (e.g. the file exists but cannot be read): return the
//!    error. Callers degrade to an empty in-memory catalog.
//!
//! A failed write while seeding or repairing is logged and otherwise ignored.
//!
//! ## Implementations
//!
//! - [`catalog_store::BlobStore`]: the load/save policy over any backend.
//! - [`fs_backend::FsBackend`]: production backend, atomic file writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── pets.json      # The catalog (JSON array of pet records)
//! └── config.json    # Settings
//! ```

use crate::error::Result;
use crate::model::Pet;

pub mod backend;
pub mod catalog_store;
pub mod fs_backend;
pub mod mem_backend;

/// Where the records returned by [`CatalogStore::load`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Read back from an existing blob.
    Stored,
    /// No blob existed; the default catalog was created.
    Seeded,
    /// The blob could not be decoded and was replaced by the default catalog.
    Repaired { reason: String },
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub pets: Vec<Pet>,
    pub origin: LoadOrigin,
}

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Load the full catalog, applying the seed-and-repair policy.
    fn load(&mut self) -> Result<Loaded>;

    /// Overwrite the stored catalog with `pets`.
    fn save(&mut self, pets: &[Pet]) -> Result<()>;

    /// Where the catalog lives, for display.
    fn location(&self) -> String;
}
