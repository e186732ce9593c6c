use super::backend::StorageBackend;
use super::{CatalogStore, LoadOrigin, Loaded};
use crate::error::{Result, ShelterError};
use crate::model::{Gender, Pet, PetDetails, Species};
use crate::seed::seed_catalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// On-disk shape of a pet. The profile travels as description text.
#[derive(Debug, Serialize, Deserialize)]
struct PetRecord {
    id: Uuid,
    species: Species,
    name: String,
    age_years: u32,
    age_months: u32,
    gender: Gender,
    description: String,
    image_path: String,
    added_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Pet> for PetRecord {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            species: pet.species,
            name: pet.name.clone(),
            age_years: pet.age_years,
            age_months: pet.age_months,
            gender: pet.gender,
            description: pet.details.to_description(),
            image_path: pet.image_path.clone(),
            added_at: pet.added_at,
            updated_at: pet.updated_at,
        }
    }
}

impl From<PetRecord> for Pet {
    fn from(record: PetRecord) -> Self {
        Self {
            id: record.id,
            species: record.species,
            name: record.name,
            age_years: record.age_years,
            age_months: record.age_months,
            gender: record.gender,
            details: PetDetails::from_description(&record.description),
            image_path: record.image_path,
            added_at: record.added_at,
            updated_at: record.updated_at,
        }
    }
}

pub fn encode(pets: &[Pet]) -> Result<Vec<u8>> {
    let records: Vec<PetRecord> = pets.iter().map(PetRecord::from).collect();
    serde_json::to_vec_pretty(&records).map_err(ShelterError::Serialization)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Pet>> {
    let records: Vec<PetRecord> =
        serde_json::from_slice(bytes).map_err(ShelterError::Serialization)?;
    Ok(records.into_iter().map(Pet::from).collect())
}

/// Whole-catalog store over a [`StorageBackend`].
///
/// Every save rewrites the full blob; there is no incremental update.
pub struct BlobStore<B: StorageBackend> {
    backend: B,
    seed_on_missing: bool,
}

impl<B: StorageBackend> BlobStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            seed_on_missing: true,
        }
    }

    /// When disabled, a missing blob starts an empty catalog instead of the seed.
    pub fn seed_on_missing(mut self, enabled: bool) -> Self {
        self.seed_on_missing = enabled;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn fallback(&self) -> Vec<Pet> {
        if self.seed_on_missing {
            seed_catalog()
        } else {
            Vec::new()
        }
    }

    /// Persist a fallback catalog; a failed write is logged, not returned.
    fn persist_fallback(&mut self, pets: &[Pet]) {
        if let Err(e) = self.save(pets) {
            warn!(
                location = %self.backend.location(),
                error = %e,
                "could not persist default catalog"
            );
        }
    }
}

impl<B: StorageBackend> CatalogStore for BlobStore<B> {
    fn load(&mut self) -> Result<Loaded> {
        let bytes = match self.backend.read_blob()? {
            Some(bytes) => bytes,
            None => {
                info!(location = %self.backend.location(), "no catalog found, seeding defaults");
                let pets = self.fallback();
                self.persist_fallback(&pets);
                return Ok(Loaded {
                    pets,
                    origin: LoadOrigin::Seeded,
                });
            }
        };

        match decode(&bytes) {
            Ok(pets) => {
                info!(location = %self.backend.location(), count = pets.len(), "catalog loaded");
                Ok(Loaded {
                    pets,
                    origin: LoadOrigin::Stored,
                })
            }
            Err(e) => {
                warn!(
                    location = %self.backend.location(),
                    error = %e,
                    "catalog is unreadable, replacing it with defaults"
                );
                let pets = self.fallback();
                self.persist_fallback(&pets);
                Ok(Loaded {
                    pets,
                    origin: LoadOrigin::Repaired {
                        reason: e.to_string(),
                    },
                })
            }
        }
    }

    fn save(&mut self, pets: &[Pet]) -> Result<()> {
        let bytes = encode(pets)?;
        self.backend.write_blob(&bytes)?;
        info!(location = %self.backend.location(), count = pets.len(), "catalog saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.backend.location()
    }
}
