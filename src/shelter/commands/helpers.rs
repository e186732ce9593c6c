use crate::catalog::{Catalog, Change};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_all, PetSelector};
use crate::store::CatalogStore;
use uuid::Uuid;

pub fn resolve_selectors<S: CatalogStore>(
    catalog: &Catalog<S>,
    selectors: &[PetSelector],
) -> Result<Vec<Uuid>> {
    resolve_all(catalog.pets(), selectors)
}

/// Records a completed change, warning if it did not reach the store.
pub fn record_change(result: &mut CmdResult, change: Change, success: String) {
    result.add_message(CmdMessage::success(success));
    if let Some(error) = change.save_error {
        result.add_message(CmdMessage::warning(format!(
            "Change kept for this session only, saving failed: {}",
            error
        )));
    }
    result.affected_pets.push(change.pet);
}
