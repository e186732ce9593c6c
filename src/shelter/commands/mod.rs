use crate::config::ShelterConfig;
use crate::index::DisplayPet;
use crate::model::Pet;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct ShelterPaths {
    /// Directory holding the catalog and config.
    pub home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_pets: Vec<Pet>,
    pub listed_pets: Vec<DisplayPet>,
    pub config: Option<ShelterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pets(mut self, pets: Vec<DisplayPet>) -> Self {
        self.listed_pets = pets;
        self
    }

    pub fn with_config(mut self, config: ShelterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
