use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_pets, PetSelector};
use crate::store::CatalogStore;

use super::helpers::resolve_selectors;

pub fn run<S: CatalogStore>(catalog: &Catalog<S>, selectors: &[PetSelector]) -> Result<CmdResult> {
    let ids = resolve_selectors(catalog, selectors)?;
    let indexed = index_pets(catalog.pets());
    let listed = ids
        .iter()
        .filter_map(|id| indexed.iter().find(|dp| &dp.pet.id == id).cloned())
        .collect();
    Ok(CmdResult::default().with_listed_pets(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mem_catalog;

    #[test]
    fn views_in_requested_order() {
        let catalog = mem_catalog();
        let result = run(
            &catalog,
            &[PetSelector::Index(3), PetSelector::Index(1)],
        )
        .unwrap();
        assert_eq!(result.listed_pets.len(), 2);
        assert_eq!(result.listed_pets[0].index, 3);
        assert_eq!(result.listed_pets[1].index, 1);
    }

    #[test]
    fn unknown_selector_fails() {
        let catalog = mem_catalog();
        assert!(run(&catalog, &[PetSelector::Text("Nobody".into())]).is_err());
    }
}
