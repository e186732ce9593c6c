use crate::catalog::{Catalog, PetFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_pets;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(catalog: &Catalog<S>, filter: &PetFilter) -> Result<CmdResult> {
    // Indexes come from the full catalog so they stay valid for later commands.
    let listed: Vec<_> = index_pets(catalog.pets())
        .into_iter()
        .filter(|dp| filter.matches(&dp.pet))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() && !catalog.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No pets match species {} and gender {}.",
            filter.species, filter.gender
        )));
    }
    Ok(result.with_listed_pets(listed))
}
