use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ShelterError {
    #[error("Pet not found: {0}")]
    PetNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid pet: {0}")]
    Validation(String),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Name '{name}' matches {count} pets; use the index or id instead")]
    Ambiguous { name: String, count: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelterError>;
