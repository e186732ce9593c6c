//! # Display Indexes and Selectors
//!
//! Pets are identified by a stable [`Uuid`], which is unpleasant to type. The
//! CLI therefore shows a 1-based **display index** next to every pet: its
//! position in the full catalog. Filtering never renumbers, so `3` refers to
//! the same pet whether it was listed under "All" or under "Dog".
//!
//! A [`PetSelector`] is what a user types to point at pets:
//!
//! - `3` or a range `2-4`: display indexes. A range may not reach past the
//!   last pet.
//! - a full UUID
//! - any other text: an exact, case-insensitive name, or failing that a
//!   unique id prefix of at least four characters
//!
//! A name made only of digits reads as an index first; it is matched as a
//! name when no pet sits at that index.
//!
//! Names are not unique. A name that matches more than one pet is refused
//! with [`ShelterError::Ambiguous`] rather than silently picking the first.

use crate::error::{Result, ShelterError};
use crate::model::Pet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const MIN_ID_PREFIX: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPet {
    pub pet: Pet,
    pub index: usize,
}

/// Pairs every pet with its display index.
pub fn index_pets<'a>(pets: impl IntoIterator<Item = &'a Pet>) -> Vec<DisplayPet> {
    pets.into_iter()
        .enumerate()
        .map(|(i, pet)| DisplayPet {
            pet: pet.clone(),
            index: i + 1,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetSelector {
    Index(usize),
    /// Inclusive span of display indexes, checked against the catalog on resolve.
    Range(usize, usize),
    Id(Uuid),
    Text(String),
}

impl fmt::Display for PetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetSelector::Index(i) => write!(f, "{}", i),
            PetSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            PetSelector::Id(id) => write!(f, "{}", id),
            PetSelector::Text(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for PetSelector {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShelterError::Selector("empty selector".into()));
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err(ShelterError::Selector("indexes start at 1".into()));
            }
            return Ok(PetSelector::Index(n));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(PetSelector::Id(id));
        }
        Ok(PetSelector::Text(s.to_string()))
    }
}

/// Parses user inputs into selectors. Ranges like `2-4` stay unexpanded until
/// they are resolved against a catalog.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PetSelector>> {
    let mut selectors = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if let Some((start, end)) = parse_range(input)? {
            selectors.push(PetSelector::Range(start, end));
        } else {
            selectors.push(input.parse()?);
        }
    }
    Ok(selectors)
}

fn parse_range(input: &str) -> Result<Option<(usize, usize)>> {
    let Some((start, end)) = input.split_once('-') else {
        return Ok(None);
    };
    let (Ok(start), Ok(end)) = (start.trim().parse::<usize>(), end.trim().parse::<usize>()) else {
        return Ok(None);
    };
    if start == 0 || end < start {
        return Err(ShelterError::Selector(format!("invalid range: {}", input)));
    }
    Ok(Some((start, end)))
}

/// Resolves one selector against the catalog to a pet id.
pub fn resolve(pets: &[Pet], selector: &PetSelector) -> Result<Uuid> {
    match selector {
        PetSelector::Index(n) => match n.checked_sub(1).and_then(|i| pets.get(i)) {
            Some(pet) => Ok(pet.id),
            None => resolve_name(pets, &n.to_string())?
                .ok_or_else(|| ShelterError::Selector(format!("no pet at index {}", n))),
        },
        PetSelector::Range(start, end) if start == end => resolve(pets, &PetSelector::Index(*start)),
        PetSelector::Range(start, end) => Err(ShelterError::Selector(format!(
            "{}-{} selects several pets; pick one",
            start, end
        ))),
        PetSelector::Id(id) => pets
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.id)
            .ok_or(ShelterError::PetNotFound(*id)),
        PetSelector::Text(text) => resolve_text(pets, text),
    }
}

/// Exact, case-insensitive name match. `Ok(None)` when no pet has the name.
fn resolve_name(pets: &[Pet], text: &str) -> Result<Option<Uuid>> {
    let by_name: Vec<&Pet> = pets
        .iter()
        .filter(|p| p.name.eq_ignore_ascii_case(text))
        .collect();
    match by_name.len() {
        0 => Ok(None),
        1 => Ok(Some(by_name[0].id)),
        count => Err(ShelterError::Ambiguous {
            name: text.to_string(),
            count,
        }),
    }
}

fn resolve_text(pets: &[Pet], text: &str) -> Result<Uuid> {
    if let Some(id) = resolve_name(pets, text)? {
        return Ok(id);
    }

    if text.len() >= MIN_ID_PREFIX {
        let prefix = text.to_ascii_lowercase();
        let by_id: Vec<&Pet> = pets
            .iter()
            .filter(|p| p.id.to_string().starts_with(&prefix))
            .collect();
        if by_id.len() == 1 {
            return Ok(by_id[0].id);
        }
        if by_id.len() > 1 {
            return Err(ShelterError::Selector(format!(
                "id prefix '{}' matches {} pets",
                text,
                by_id.len()
            )));
        }
    }

    Err(ShelterError::Selector(format!("no pet named '{}'", text)))
}

/// Resolves every selector, keeping input order and dropping repeats.
pub fn resolve_all(pets: &[Pet], selectors: &[PetSelector]) -> Result<Vec<Uuid>> {
    let mut ids: Vec<Uuid> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match selector {
            PetSelector::Range(start, end) => {
                if *start == 0 || end < start || *end > pets.len() {
                    return Err(ShelterError::Selector(format!(
                        "range {}-{} goes past the last pet ({})",
                        start,
                        end,
                        pets.len()
                    )));
                }
                for pet in &pets[start - 1..*end] {
                    if !ids.contains(&pet.id) {
                        ids.push(pet.id);
                    }
                }
            }
            other => {
                let id = resolve(pets, other)?;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
    }
    Ok(ids)
}
