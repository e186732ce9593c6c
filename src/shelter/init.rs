use crate::api::{ShelterApi, ShelterPaths};
use crate::config::ShelterConfig;
use crate::error::{Result, ShelterError};
use crate::store::catalog_store::BlobStore;
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const HOME_ENV: &str = "SHELTER_HOME";

pub struct ShelterContext {
    pub api: ShelterApi<BlobStore<FsBackend>>,
    pub config: ShelterConfig,
}

/// Picks the data directory: the explicit override, then `$SHELTER_HOME`,
/// then the platform data directory.
pub fn resolve_home(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    resolve_home_with(override_dir, std::env::var_os(HOME_ENV))
}

fn resolve_home_with(override_dir: Option<PathBuf>, env_dir: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "shelter", "shelter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ShelterError::Config(format!(
                "could not determine a data directory; set {} or pass --home",
                HOME_ENV
            ))
        })
}

pub fn initialize(override_dir: Option<PathBuf>) -> Result<ShelterContext> {
    let home = resolve_home(override_dir)?;
    debug!(home = %home.display(), "using data directory");

    let config = ShelterConfig::load(&home).unwrap_or_else(|e| {
        warn!(error = %e, "config unreadable, using defaults");
        ShelterConfig::default()
    });

    let backend = FsBackend::new(home.clone()).with_data_file(&config.data_file);
    let store = BlobStore::with_backend(backend).seed_on_missing(config.seed_on_missing);
    let api = ShelterApi::open(store, ShelterPaths { home });

    Ok(ShelterContext { api, config })
}
