use super::backend::StorageBackend;
use crate::error::{Result, ShelterError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "pets.json";

pub struct FsBackend {
    root: PathBuf,
    data_file: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_blob(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(self.data_path()) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ShelterError::Io(e)),
        }
    }

    fn write_blob(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".pets-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, bytes).map_err(ShelterError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.data_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelterError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.data_path().display().to_string()
    }
}
