use crate::catalog::Catalog;
use crate::store::catalog_store::BlobStore;
use crate::store::fs_backend::FsBackend;
use crate::store::mem_backend::MemBackend;
use std::path::PathBuf;
use tempfile::TempDir;

/// A seeded catalog backed by memory.
pub fn mem_catalog() -> Catalog<BlobStore<MemBackend>> {
    let (catalog, _) = Catalog::open(BlobStore::with_backend(MemBackend::new()))
        .expect("memory catalog always opens");
    catalog
}

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A fresh store over this environment's directory, as a new process would open it.
    pub fn store(&self) -> BlobStore<FsBackend> {
        BlobStore::with_backend(FsBackend::new(self.root.clone()))
    }
}
