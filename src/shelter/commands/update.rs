use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PetSelector;
use crate::model::PetUpdate;
use crate::store::CatalogStore;

use super::helpers::{record_change, resolve_selectors};

pub fn run<S: CatalogStore>(
    catalog: &mut Catalog<S>,
    selector: &PetSelector,
    update: &PetUpdate,
) -> Result<CmdResult> {
    let ids = resolve_selectors(catalog, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    for id in ids {
        let change = catalog.update(&id, update)?;
        let message = format!("Pet updated: {}", change.pet.name);
        record_change(&mut result, change, message);
    }

    Ok(result)
}
