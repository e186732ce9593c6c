use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewPet;
use crate::store::CatalogStore;

use super::helpers::record_change;

pub fn run<S: CatalogStore>(catalog: &mut Catalog<S>, new: NewPet) -> Result<CmdResult> {
    let shared_name = catalog
        .pets()
        .iter()
        .any(|p| p.name.eq_ignore_ascii_case(new.name.trim()));

    let change = catalog.add(new)?;
    let mut result = CmdResult::default();
    let message = format!(
        "Pet added ({}): {} the {}",
        catalog.len(),
        change.pet.name,
        change.pet.species
    );
    record_change(&mut result, change, message);

    if shared_name {
        result.add_message(CmdMessage::info(
            "Another pet has the same name; refer to them by index or id.",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Gender, Species};
    use crate::test_utils::mem_catalog;

    fn rex() -> NewPet {
        NewPet::new(Species::Dog, "Rex", Gender::Male).with_image("rex.png")
    }

    #[test]
    fn adds_pet() {
        let mut catalog = mem_catalog();
        let result = run(&mut catalog, rex()).unwrap();
        assert_eq!(result.affected_pets.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(catalog.get(&result.affected_pets[0].id).is_some());
    }

    #[test]
    fn notes_shared_names() {
        let mut catalog = mem_catalog();
        run(&mut catalog, rex()).unwrap();
        let result = run(&mut catalog, rex()).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Info));
    }

    #[test]
    fn warns_when_save_fails() {
        let mut catalog = mem_catalog();
        catalog.store().backend().set_simulate_write_error(true);
        let result = run(&mut catalog, rex()).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn rejects_invalid_pet() {
        let mut catalog = mem_catalog();
        let before = catalog.len();
        let blank = NewPet::new(Species::Cat, "", Gender::Female).with_image("x.png");
        assert!(run(&mut catalog, blank).is_err());
        assert_eq!(catalog.len(), before);
    }
}
