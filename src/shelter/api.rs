//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all shelter operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Opens** the catalog once and owns it for the session
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing index, range, id and name selectors)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over CatalogStore
//!
//! `ShelterApi<S: CatalogStore>` is generic over the storage:
//! - Production: `ShelterApi<BlobStore<FsBackend>>`
//! - Testing: `ShelterApi<BlobStore<MemBackend>>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::index::{parse_selectors, PetSelector};
use crate::model::{NewPet, PetUpdate};
use crate::store::{CatalogStore, LoadOrigin};

/// The main API facade for shelter operations.
pub struct ShelterApi<S: CatalogStore> {
    catalog: Catalog<S>,
    paths: commands::ShelterPaths,
    startup: Vec<commands::CmdMessage>,
}

impl<S: CatalogStore> ShelterApi<S> {
    /// Opens the catalog held by `store`.
    ///
    /// Opening never fails: an unreadable store leaves the session with an
    /// empty catalog. How the catalog was obtained is reported through
    /// [`ShelterApi::startup_messages`].
    pub fn open(store: S, paths: commands::ShelterPaths) -> Self {
        let (catalog, origin) = Catalog::open_or_empty(store);
        let mut startup = Vec::new();
        match origin {
            Ok(LoadOrigin::Stored) => {}
            Ok(LoadOrigin::Seeded) => startup.push(commands::CmdMessage::info(format!(
                "Created a new catalog at {}",
                catalog.location()
            ))),
            Ok(LoadOrigin::Repaired { reason }) => {
                startup.push(commands::CmdMessage::warning(format!(
                    "The catalog at {} was unreadable ({}) and has been reset",
                    catalog.location(),
                    reason
                )))
            }
            Err(e) => startup.push(commands::CmdMessage::warning(format!(
                "Could not load the catalog, starting empty: {}",
                e
            ))),
        }
        Self {
            catalog,
            paths,
            startup,
        }
    }

    pub fn list_pets(&self, filter: PetFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, &filter)
    }

    pub fn view_pets<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.catalog, &selectors)
    }

    pub fn add_pet(&mut self, new: NewPet) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, new)
    }

    pub fn update_pet(&mut self, selector: &str, update: &PetUpdate) -> Result<commands::CmdResult> {
        let selector: PetSelector = selector.parse()?;
        commands::update::run(&mut self.catalog, &selector, update)
    }

    pub fn remove_pets<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::remove::run(&mut self.catalog, &selectors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Messages produced while opening the catalog.
    pub fn startup_messages(&self) -> &[commands::CmdMessage] {
        &self.startup
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn location(&self) -> String {
        self.catalog.location()
    }

    pub fn paths(&self) -> &commands::ShelterPaths {
        &self.paths
    }
}

pub use crate::catalog::{Choice, PetFilter};
pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelterPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Species};
    use crate::seed::seed_catalog;
    use crate::store::catalog_store::BlobStore;
    use crate::store::mem_backend::MemBackend;
    use std::path::PathBuf;

    fn paths() -> ShelterPaths {
        ShelterPaths {
            home: PathBuf::from("/unused"),
        }
    }

    fn api_with(backend: MemBackend) -> ShelterApi<BlobStore<MemBackend>> {
        ShelterApi::open(BlobStore::with_backend(backend), paths())
    }

    #[test]
    fn fresh_store_reports_seeding() {
        let api = api_with(MemBackend::new());
        assert_eq!(api.catalog().len(), seed_catalog().len());
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Info);
    }

    #[test]
    fn corrupt_store_reports_repair() {
        let api = api_with(MemBackend::with_blob("not json"));
        assert_eq!(api.catalog().len(), seed_catalog().len());
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Warning);
    }

    #[test]
    fn unreadable_store_starts_empty() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let api = api_with(backend);
        assert!(api.catalog().is_empty());
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Warning);
    }

    #[test]
    fn existing_store_is_silent() {
        let first = api_with(MemBackend::new());
        let blob = first.catalog().store().backend().blob().unwrap();
        let second = api_with(MemBackend::with_blob(blob));
        assert!(second.startup_messages().is_empty());
    }

    #[test]
    fn list_dispatches_filter() {
        let api = api_with(MemBackend::new());
        let filter = PetFilter::new(Choice::Only(Species::Cat), Choice::Only(Gender::Female));
        let result = api.list_pets(filter).unwrap();
        assert_eq!(result.listed_pets.len(), 2);
    }

    #[test]
    fn view_accepts_ranges() {
        let api = api_with(MemBackend::new());
        let result = api.view_pets(&["1-3"]).unwrap();
        assert_eq!(result.listed_pets.len(), 3);
    }

    #[test]
    fn oversized_range_is_a_selector_error() {
        let mut api = api_with(MemBackend::new());
        assert!(api.view_pets(&["1-100000000000000000"]).is_err());
        assert!(api.remove_pets(&["2-100000000000000000"]).is_err());
        assert_eq!(api.catalog().len(), seed_catalog().len());
    }

    #[test]
    fn add_update_remove_flow() {
        let mut api = api_with(MemBackend::new());
        let rex = NewPet::new(Species::Dog, "Rex", Gender::Male).with_image("rex.png");
        let added = api.add_pet(rex).unwrap();
        let id = added.affected_pets[0].id;

        let update = PetUpdate {
            age_years: Some(4),
            ..Default::default()
        };
        api.update_pet("rex", &update).unwrap();
        assert_eq!(api.catalog().get(&id).unwrap().age_years, 4);

        api.remove_pets(&[id.to_string()]).unwrap();
        assert!(api.catalog().get(&id).is_none());
    }
}
