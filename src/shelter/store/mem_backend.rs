use super::backend::StorageBackend;
use crate::error::{Result, ShelterError};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelter is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    blob: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds the given bytes, e.g. a corrupt blob.
    pub fn with_blob(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::default();
        *backend.blob.borrow_mut() = Some(bytes.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation (an unreadable, not a corrupt, blob).
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read_blob(&self) -> Result<Option<Vec<u8>>> {
        if self.simulate_read_error.get() {
            return Err(ShelterError::Store("Simulated read error".to_string()));
        }
        Ok(self.blob.borrow().clone())
    }

    fn write_blob(&self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelterError::Store("Simulated write error".to_string()));
        }
        *self.blob.borrow_mut() = Some(bytes.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://pets.json".to_string()
    }
}
