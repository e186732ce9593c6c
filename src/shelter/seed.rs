//! Default catalog written on first run.
//!
//! Ids and timestamps are fixed so that every fresh data directory starts
//! from exactly the same records.

use crate::model::{Gender, Pet, PetDetails, SpayNeuter, Species};
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

/// 2024-03-01T09:00:00Z
const SEEDED_AT_SECS: i64 = 1_709_283_600;

struct SeedPet {
    species: Species,
    name: &'static str,
    years: u32,
    months: u32,
    gender: Gender,
    color: &'static str,
    breed: &'static str,
    health: &'static str,
    spay_neuter: SpayNeuter,
    vaccinations: &'static str,
    about: &'static str,
}

static SEED: Lazy<Vec<Pet>> = Lazy::new(|| {
    let seeded_at = DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(SEEDED_AT_SECS);
    seed_pets()
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let mut details = PetDetails::default();
            details.color = Some(s.color.to_string());
            details.breed = Some(s.breed.to_string());
            details.health_status = Some(s.health.to_string());
            details.spay_neuter = Some(s.spay_neuter);
            details.vaccinations = Some(s.vaccinations.to_string());
            details.about = Some(s.about.to_string());

            Pet {
                id: seed_id(i),
                species: s.species,
                name: s.name.to_string(),
                age_years: s.years,
                age_months: s.months,
                gender: s.gender,
                details,
                image_path: format!(
                    "/resources/{}_{}.png",
                    s.species.label().to_lowercase(),
                    s.name.to_lowercase()
                ),
                added_at: seeded_at,
                updated_at: seeded_at,
            }
        })
        .collect()
});

/// The fixed default catalog.
pub fn seed_catalog() -> Vec<Pet> {
    SEED.clone()
}

fn seed_id(position: usize) -> Uuid {
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0000 | (position as u128 + 1))
}

fn seed_pets() -> Vec<SeedPet> {
    vec![
        SeedPet {
            species: Species::Cat,
            name: "Ash",
            years: 2,
            months: 0,
            gender: Gender::Male,
            color: "Blue",
            breed: "British Shorthair",
            health: "Mild asthma, managed with an inhaler",
            spay_neuter: SpayNeuter::Neutered,
            vaccinations: "Deworm, 4-in-1, Anti-rabies",
            about: "Ash came in from a closing cattery and loves a sunny windowsill.",
        },
        SeedPet {
            species: Species::Cat,
            name: "Pipoy",
            years: 0,
            months: 3,
            gender: Gender::Male,
            color: "Ginger",
            breed: "Persian mix",
            health: "No health issues",
            spay_neuter: SpayNeuter::NotYet,
            vaccinations: "Deworm, 4-in-1",
            about: "Pipoy is the boldest of an accidental litter\nand will climb anything.",
        },
        SeedPet {
            species: Species::Cat,
            name: "Mimay",
            years: 2,
            months: 0,
            gender: Gender::Female,
            color: "Ginger white",
            breed: "Domestic Shorthair",
            health: "Missing right eye after a road accident",
            spay_neuter: SpayNeuter::Spayed,
            vaccinations: "Deworm, 4-in-1, Anti-rabies",
            about: "Mimay was found injured and has made a full recovery.",
        },
        SeedPet {
            species: Species::Cat,
            name: "Nene",
            years: 0,
            months: 11,
            gender: Gender::Female,
            color: "Blue",
            breed: "British Shorthair",
            health: "No health issues",
            spay_neuter: SpayNeuter::Spayed,
            vaccinations: "Deworm, 4-in-1, Anti-rabies",
            about: "Nene is calm, affectionate and good with children.",
        },
        SeedPet {
            species: Species::Dog,
            name: "Alexis",
            years: 2,
            months: 0,
            gender: Gender::Male,
            color: "Brown",
            breed: "Aspin",
            health: "One eye removed after an old injury.\nStable on maintenance medication.",
            spay_neuter: SpayNeuter::Neutered,
            vaccinations: "Anti-rabies, 8-in-1 & Oral Deworm",
            about: "Alexis was found alone in a vacant lot and is gentle with everyone.",
        },
        SeedPet {
            species: Species::Dog,
            name: "Billie",
            years: 1,
            months: 0,
            gender: Gender::Male,
            color: "Black and White",
            breed: "Border Collie",
            health: "Cataract in left eye",
            spay_neuter: SpayNeuter::NotYet,
            vaccinations: "Anti-rabies, 8-in-1 & Oral Deworm",
            about: "Billie needs an active home and a job to do.",
        },
        SeedPet {
            species: Species::Dog,
            name: "Alusha",
            years: 2,
            months: 0,
            gender: Gender::Female,
            color: "Light Brown",
            breed: "Golden Retriever",
            health: "No health issues",
            spay_neuter: SpayNeuter::Spayed,
            vaccinations: "Anti-rabies, 8-in-1 & Oral Deworm",
            about: "Alusha was surrendered by a backyard breeder and adores people.",
        },
        SeedPet {
            species: Species::Dog,
            name: "Cassie",
            years: 0,
            months: 5,
            gender: Gender::Female,
            color: "Black",
            breed: "Labrador",
            health: "Food allergies, on a prescription diet",
            spay_neuter: SpayNeuter::NotYet,
            vaccinations: "8-in-1 & Oral Deworm",
            about: "Cassie was overlooked at a crowded shelter and is now thriving.",
        },
    ]
}
