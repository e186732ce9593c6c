use crate::error::Result;

/// Abstract interface for raw catalog blob I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::catalog_store::BlobStore`] handles the "what"
/// (encoding, seeding, repair).
pub trait StorageBackend {
    /// Read the whole catalog blob.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_blob(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the catalog blob.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_blob(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location of the blob, for messages and `shelter path`.
    fn location(&self) -> String;
}
