use clap::{Args, Parser, Subcommand};
use shelter::api::{Choice, PetFilter};
use shelter::model::{Gender, NewPet, PetDetails, PetUpdate, SpayNeuter, Species};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelter", bin_name = "shelter", version = get_version())]
#[command(about = "Keep the catalog of pets up for adoption", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides $SHELTER_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List pets, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the full profile of one or more pets
    #[command(alias = "v")]
    View {
        /// Index (3), range (2-4), id, or name of the pets
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Add a pet to the catalog
    #[command(alias = "a")]
    Add(AddArgs),

    /// Change a pet's fields (species cannot be changed)
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Remove one or more pets
    #[command(alias = "rm")]
    Remove {
        /// Index (3), range (2-4), id, or name of the pets
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Print where the catalog is stored
    Path,

    /// Show or change configuration
    Config {
        /// Configuration key (data-file, seed-on-missing)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// all, cat or dog
    #[arg(long, default_value = "all")]
    pub species: Choice<Species>,

    /// all, male or female
    #[arg(long, default_value = "all")]
    pub gender: Choice<Gender>,
}

impl ListArgs {
    pub fn filter(&self) -> PetFilter {
        PetFilter::new(self.species, self.gender)
    }
}

// Profile fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub breed: Option<String>,

    /// Health status
    #[arg(long)]
    pub health: Option<String>,

    /// Not yet, Spayed, Neutered, or free text
    #[arg(long)]
    pub spay_neuter: Option<String>,

    /// Vaccinations and deworming
    #[arg(long)]
    pub vaccinations: Option<String>,

    /// Free-form description
    #[arg(long)]
    pub about: Option<String>,
}

impl ProfileArgs {
    fn details(&self) -> PetDetails {
        let mut details = PetDetails::default();
        details.color = non_empty(&self.color);
        details.breed = non_empty(&self.breed);
        details.health_status = non_empty(&self.health);
        details.spay_neuter = non_empty(&self.spay_neuter).map(|v| SpayNeuter::parse(&v));
        details.vaccinations = non_empty(&self.vaccinations);
        details.about = non_empty(&self.about);
        details
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// cat or dog
    #[arg(long)]
    pub species: Species,

    #[arg(long)]
    pub name: String,

    /// Age, whole years
    #[arg(long, default_value_t = 0)]
    pub years: u32,

    /// Age, months beyond the whole years
    #[arg(long, default_value_t = 0)]
    pub months: u32,

    /// male or female
    #[arg(long)]
    pub gender: Gender,

    /// Path of the pet's photo
    #[arg(long)]
    pub image: String,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl AddArgs {
    pub fn new_pet(&self) -> NewPet {
        NewPet::new(self.species, self.name.clone(), self.gender)
            .with_age(self.years, self.months)
            .with_image(self.image.clone())
            .with_details(self.profile.details())
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Index, id, or name of the pet
    pub selector: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub years: Option<u32>,

    #[arg(long)]
    pub months: Option<u32>,

    #[arg(long)]
    pub gender: Option<Gender>,

    #[arg(long)]
    pub image: Option<String>,

    // An empty string clears a profile field.
    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl EditArgs {
    pub fn update(&self) -> PetUpdate {
        PetUpdate {
            name: self.name.clone(),
            age_years: self.years,
            age_months: self.months,
            gender: self.gender,
            image_path: self.image.clone(),
            color: self.profile.color.clone(),
            breed: self.profile.breed.clone(),
            health_status: self.profile.health.clone(),
            spay_neuter: self.profile.spay_neuter.as_deref().map(SpayNeuter::parse),
            vaccinations: self.profile.vaccinations.clone(),
            about: self.profile.about.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shelter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn list_defaults_to_all() {
        match parse(&["list"]).command {
            Some(Commands::List(args)) => assert_eq!(args.filter(), PetFilter::default()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn list_parses_filters() {
        match parse(&["list", "--species", "Dog", "--gender", "female"]).command {
            Some(Commands::List(args)) => {
                assert_eq!(args.species, Choice::Only(Species::Dog));
                assert_eq!(args.gender, Choice::Only(Gender::Female));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_species() {
        let parsed = Cli::try_parse_from(["shelter", "list", "--species", "parrot"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_builds_new_pet() {
        let cli = parse(&[
            "add", "--species", "cat", "--name", "Miso", "--months", "5", "--gender", "f",
            "--image", "miso.png", "--spay-neuter", "Spayed",
        ]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        let new = args.new_pet();
        assert_eq!(new.species, Species::Cat);
        assert_eq!(new.age_months, 5);
        assert_eq!(new.details.spay_neuter, Some(SpayNeuter::Spayed));
        assert_eq!(new.details.color, None);
    }

    #[test]
    fn edit_has_no_species_flag() {
        let parsed = Cli::try_parse_from(["shelter", "edit", "1", "--species", "dog"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn edit_keeps_empty_strings_for_clearing() {
        let cli = parse(&["edit", "Ash", "--breed", ""]);
        let Some(Commands::Edit(args)) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(args.update().breed, Some(String::new()));
    }

    #[test]
    fn edit_with_empty_spay_neuter_clears_it() {
        let cli = parse(&["edit", "Ash", "--spay-neuter", ""]);
        let Some(Commands::Edit(args)) = cli.command else {
            panic!("expected edit");
        };
        let update = args.update();
        assert!(update.spay_neuter.is_some());

        let mut ash = shelter::seed::seed_catalog().remove(0);
        ash.details.spay_neuter = Some(SpayNeuter::Neutered);
        update.apply(&mut ash);
        assert_eq!(ash.details.spay_neuter, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["path", "--home", "/tmp/x", "-v"]);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }
}
