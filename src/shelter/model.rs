use crate::description;
use crate::error::{Result, ShelterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Cat, Species::Dog];

    pub fn label(&self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            other => Err(ShelterError::Validation(format!(
                "unknown species '{}' (expected Cat or Dog)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(ShelterError::Validation(format!(
                "unknown gender '{}' (expected Male or Female)",
                other
            ))),
        }
    }
}

/// Sterilisation state as recorded on the intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpayNeuter {
    NotYet,
    Spayed,
    Neutered,
    /// Free text that predates the fixed choices.
    Other(String),
}

impl SpayNeuter {
    pub fn label(&self) -> &str {
        match self {
            SpayNeuter::NotYet => "Not yet",
            SpayNeuter::Spayed => "Spayed",
            SpayNeuter::Neutered => "Neutered",
            SpayNeuter::Other(text) => text,
        }
    }

    /// Never fails: unknown values are preserved as [`SpayNeuter::Other`].
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "not yet" | "no" => SpayNeuter::NotYet,
            "spayed" => SpayNeuter::Spayed,
            "neutered" => SpayNeuter::Neutered,
            _ => SpayNeuter::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for SpayNeuter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured profile of a pet.
///
/// On disk the profile is a block of `Label: value` lines (see
/// [`crate::description`]). When a loaded block is not in the layout this
/// type would produce itself, the original text is remembered and written
/// back unchanged for as long as the structured fields still match it.
#[derive(Debug, Clone, Default)]
pub struct PetDetails {
    pub color: Option<String>,
    pub breed: Option<String>,
    pub health_status: Option<String>,
    pub spay_neuter: Option<SpayNeuter>,
    pub vaccinations: Option<String>,
    pub about: Option<String>,
    original: Option<String>,
}

impl PartialEq for PetDetails {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.breed == other.breed
            && self.health_status == other.health_status
            && self.spay_neuter == other.spay_neuter
            && self.vaccinations == other.vaccinations
            && self.about == other.about
    }
}

impl Eq for PetDetails {}

impl PetDetails {
    pub fn from_description(text: &str) -> Self {
        let mut details = description::parse(text);
        if description::compose(&details) != text {
            details.original = Some(text.to_string());
        }
        details
    }

    pub fn to_description(&self) -> String {
        if let Some(original) = &self.original {
            if description::parse(original) == *self {
                return original.clone();
            }
        }
        description::compose(self)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or_default()
    }

    pub fn breed(&self) -> &str {
        self.breed.as_deref().unwrap_or_default()
    }

    pub fn health_status(&self) -> &str {
        self.health_status.as_deref().unwrap_or_default()
    }

    pub fn spay_neuter(&self) -> &str {
        self.spay_neuter.as_ref().map(|s| s.label()).unwrap_or_default()
    }

    pub fn vaccinations(&self) -> &str {
        self.vaccinations.as_deref().unwrap_or_default()
    }

    pub fn about(&self) -> &str {
        self.about.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: Uuid,
    pub species: Species,
    pub name: String,
    pub age_years: u32,
    pub age_months: u32,
    pub gender: Gender,
    pub details: PetDetails,
    pub image_path: String,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    pub fn new(new: NewPet) -> Result<Self> {
        new.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            species: new.species,
            name: new.name.trim().to_string(),
            age_years: new.age_years,
            age_months: new.age_months,
            gender: new.gender,
            details: new.details,
            image_path: new.image_path.trim().to_string(),
            added_at: now,
            updated_at: now,
        })
    }

    /// Human-friendly age, e.g. "4 months", "1 years & 2 months", "3 years".
    pub fn age_label(&self) -> String {
        if self.age_years == 0 && self.age_months > 0 {
            format!("{} months", self.age_months)
        } else if self.age_years > 0 && self.age_months > 0 {
            format!("{} years & {} months", self.age_years, self.age_months)
        } else {
            format!("{} years", self.age_years)
        }
    }
}

/// Input for creating a pet.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub species: Species,
    pub name: String,
    pub age_years: u32,
    pub age_months: u32,
    pub gender: Gender,
    pub details: PetDetails,
    pub image_path: String,
}

impl NewPet {
    pub fn new(species: Species, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            species,
            name: name.into(),
            age_years: 0,
            age_months: 0,
            gender,
            details: PetDetails::default(),
            image_path: String::new(),
        }
    }

    pub fn with_age(mut self, years: u32, months: u32) -> Self {
        self.age_years = years;
        self.age_months = months;
        self
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    pub fn with_details(mut self, details: PetDetails) -> Self {
        self.details = details;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_image_path(&self.image_path)
    }
}

/// Partial edit of a pet. Species cannot be changed once a pet exists.
///
/// Profile fields set to an empty string are cleared. For `spay_neuter` that
/// is `SpayNeuter::Other` holding blank text.
#[derive(Debug, Clone, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub age_years: Option<u32>,
    pub age_months: Option<u32>,
    pub gender: Option<Gender>,
    pub image_path: Option<String>,
    pub color: Option<String>,
    pub breed: Option<String>,
    pub health_status: Option<String>,
    pub spay_neuter: Option<SpayNeuter>,
    pub vaccinations: Option<String>,
    pub about: Option<String>,
}

impl PetUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age_years.is_none()
            && self.age_months.is_none()
            && self.gender.is_none()
            && self.image_path.is_none()
            && self.color.is_none()
            && self.breed.is_none()
            && self.health_status.is_none()
            && self.spay_neuter.is_none()
            && self.vaccinations.is_none()
            && self.about.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(image_path) = &self.image_path {
            validate_image_path(image_path)?;
        }
        Ok(())
    }

    /// Applies the edit in place. Call [`PetUpdate::validate`] first.
    pub fn apply(&self, pet: &mut Pet) {
        if let Some(name) = &self.name {
            pet.name = name.trim().to_string();
        }
        if let Some(years) = self.age_years {
            pet.age_years = years;
        }
        if let Some(months) = self.age_months {
            pet.age_months = months;
        }
        if let Some(gender) = self.gender {
            pet.gender = gender;
        }
        if let Some(image_path) = &self.image_path {
            pet.image_path = image_path.trim().to_string();
        }

        let details = &mut pet.details;
        set_text(&mut details.color, &self.color);
        set_text(&mut details.breed, &self.breed);
        set_text(&mut details.health_status, &self.health_status);
        set_text(&mut details.vaccinations, &self.vaccinations);
        set_text(&mut details.about, &self.about);
        if let Some(spay_neuter) = &self.spay_neuter {
            details.spay_neuter = if spay_neuter.label().trim().is_empty() {
                None
            } else {
                Some(spay_neuter.clone())
            };
        }

        pet.updated_at = Utc::now();
    }
}

fn set_text(field: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        *field = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ShelterError::Validation("name cannot be empty".into()));
    }
    Ok(())
}

fn validate_image_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ShelterError::Validation("image path cannot be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(years: u32, months: u32) -> Pet {
        Pet::new(
            NewPet::new(Species::Cat, "Miso", Gender::Female)
                .with_age(years, months)
                .with_image("/img/miso.png"),
        )
        .unwrap()
    }

    #[test]
    fn age_label_variants() {
        assert_eq!(pet(0, 4).age_label(), "4 months");
        assert_eq!(pet(1, 2).age_label(), "1 years & 2 months");
        assert_eq!(pet(3, 0).age_label(), "3 years");
        assert_eq!(pet(0, 0).age_label(), "0 years");
    }

    #[test]
    fn new_pet_requires_name_and_image() {
        let blank = NewPet::new(Species::Dog, "  ", Gender::Male).with_image("/x.png");
        assert!(matches!(Pet::new(blank), Err(ShelterError::Validation(_))));

        let no_image = NewPet::new(Species::Dog, "Rex", Gender::Male);
        assert!(matches!(Pet::new(no_image), Err(ShelterError::Validation(_))));
    }

    #[test]
    fn parses_species_and_gender_case_insensitively() {
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("DOG".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("hamster".parse::<Species>().is_err());
    }

    #[test]
    fn update_clears_profile_field_with_empty_string() {
        let mut p = pet(1, 0);
        p.details.breed = Some("Siamese".into());
        let update = PetUpdate {
            breed: Some(String::new()),
            color: Some(" Cream ".into()),
            ..Default::default()
        };
        update.apply(&mut p);
        assert_eq!(p.details.breed, None);
        assert_eq!(p.details.color(), "Cream");
    }

    #[test]
    fn update_clears_spay_neuter_with_blank_text() {
        let mut p = pet(1, 0);
        p.details.spay_neuter = Some(SpayNeuter::Spayed);
        let update = PetUpdate {
            spay_neuter: Some(SpayNeuter::parse("  ")),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply(&mut p);
        assert_eq!(p.details.spay_neuter, None);
        assert_eq!(p.details.spay_neuter(), "");
    }

    #[test]
    fn update_rejects_blank_name() {
        let update = PetUpdate {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn absent_profile_fields_read_as_empty() {
        let details = PetDetails::default();
        assert_eq!(details.breed(), "");
        assert_eq!(details.spay_neuter(), "");
    }

    #[test]
    fn spay_neuter_keeps_unknown_text() {
        assert_eq!(SpayNeuter::parse("not yet"), SpayNeuter::NotYet);
        assert_eq!(
            SpayNeuter::parse(" scheduled "),
            SpayNeuter::Other("scheduled".into())
        );
    }
}
