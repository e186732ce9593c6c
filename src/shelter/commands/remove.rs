use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::PetSelector;
use crate::store::CatalogStore;

use super::helpers::{record_change, resolve_selectors};

pub fn run<S: CatalogStore>(catalog: &mut Catalog<S>, selectors: &[PetSelector]) -> Result<CmdResult> {
    // Resolve everything up front; removing shifts the display indexes.
    let ids = resolve_selectors(catalog, selectors)?;
    let mut result = CmdResult::default();

    for id in ids {
        let change = catalog.remove(&id)?;
        let message = format!("Pet removed: {} the {}", change.pet.name, change.pet.species);
        record_change(&mut result, change, message);
    }

    Ok(result)
}
