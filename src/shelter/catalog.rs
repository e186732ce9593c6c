//! # Catalog
//!
//! The in-memory, authoritative list of pets for the running session.
//!
//! The catalog is loaded from its [`CatalogStore`] once, when opened. Every
//! mutation changes the in-memory list first and then writes the whole list
//! back before returning, so a read that follows a completed mutation always
//! sees it.
//!
//! A failed write does not undo the mutation: the in-memory list stays the
//! source of truth for the session and the next successful save catches the
//! store up. The failure is logged and reported through
//! [`Change::save_error`].

use crate::error::{Result, ShelterError};
use crate::model::{Gender, NewPet, Pet, PetUpdate, Species};
use crate::store::{CatalogStore, LoadOrigin};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};
use uuid::Uuid;

/// A filter dimension: either everything, or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr<Err = ShelterError>> FromStr for Choice<T> {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("All"),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PetFilter {
    pub species: Choice<Species>,
    pub gender: Choice<Gender>,
}

impl PetFilter {
    pub fn new(species: Choice<Species>, gender: Choice<Gender>) -> Self {
        Self { species, gender }
    }

    pub fn matches(&self, pet: &Pet) -> bool {
        self.species.matches(&pet.species) && self.gender.matches(&pet.gender)
    }
}

/// Outcome of a mutation.
#[derive(Debug, Clone)]
pub struct Change {
    /// The pet as added, removed, or after the update.
    pub pet: Pet,
    /// Set when the change could not be written to the store.
    pub save_error: Option<String>,
}

pub struct Catalog<S: CatalogStore> {
    store: S,
    pets: Vec<Pet>,
}

impl<S: CatalogStore> Catalog<S> {
    /// Load the catalog from `store`.
    pub fn open(store: S) -> Result<(Self, LoadOrigin)> {
        let (catalog, origin) = Self::open_or_empty(store);
        origin.map(|origin| (catalog, origin))
    }

    /// Like [`Catalog::open`], but an unreadable store still yields a usable,
    /// empty catalog alongside the load error.
    pub fn open_or_empty(mut store: S) -> (Self, Result<LoadOrigin>) {
        match store.load() {
            Ok(loaded) => (
                Self {
                    store,
                    pets: loaded.pets,
                },
                Ok(loaded.origin),
            ),
            Err(e) => {
                warn!(location = %store.location(), error = %e, "catalog could not be loaded");
                (Self::empty(store), Err(e))
            }
        }
    }

    /// A catalog with no records, for when the store could not be loaded.
    pub fn empty(store: S) -> Self {
        Self {
            store,
            pets: Vec::new(),
        }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Pet> {
        self.pets.iter().find(|p| &p.id == id)
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pets matching `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a PetFilter) -> impl Iterator<Item = &'a Pet> + 'a {
        debug!(species = %filter.species, gender = %filter.gender, "filtering catalog");
        self.pets.iter().filter(move |p| filter.matches(p))
    }

    /// Append a new pet. Names need not be unique.
    pub fn add(&mut self, new: NewPet) -> Result<Change> {
        let pet = Pet::new(new)?;
        self.pets.push(pet.clone());
        let save_error = self.persist();
        Ok(Change { pet, save_error })
    }

    pub fn remove(&mut self, id: &Uuid) -> Result<Change> {
        let position = self.position(id)?;
        let pet = self.pets.remove(position);
        let save_error = self.persist();
        Ok(Change { pet, save_error })
    }

    /// Rewrite the fields named in `update`. Species never changes.
    pub fn update(&mut self, id: &Uuid, update: &PetUpdate) -> Result<Change> {
        let position = self.position(id)?;
        update.validate()?;
        update.apply(&mut self.pets[position]);
        let pet = self.pets[position].clone();
        let save_error = self.persist();
        Ok(Change { pet, save_error })
    }

    fn position(&self, id: &Uuid) -> Result<usize> {
        self.pets
            .iter()
            .position(|p| &p.id == id)
            .ok_or(ShelterError::PetNotFound(*id))
    }

    fn persist(&mut self) -> Option<String> {
        match self.store.save(&self.pets) {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    location = %self.store.location(),
                    error = %e,
                    "catalog changed in memory but could not be saved"
                );
                Some(e.to_string())
            }
        }
    }
}
