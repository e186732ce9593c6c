use crate::commands::{CmdMessage, CmdResult, ShelterPaths};
use crate::config::ShelterConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ShelterPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.home;
    match action {
        ConfigAction::ShowAll => {
            let config = ShelterConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ShelterConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Ok(val) => result.add_message(CmdMessage::info(val)),
                Err(e) => result.add_message(CmdMessage::error(e.to_string())),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ShelterConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {} (takes effect on the next run)",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> ShelterPaths {
        ShelterPaths {
            home: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn shows_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ShelterConfig::default()));
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        let set = ConfigAction::Set("data-file".into(), "animals.json".into());
        let result = run(&paths(&dir), set).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(&paths(&dir), ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(shown.messages[0].content, "animals.json");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = TempDir::new().unwrap();
        let set = ConfigAction::Set("seed-on-missing".into(), "maybe".into());
        let result = run(&paths(&dir), set).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn pointing_the_catalog_at_the_config_file_is_refused() {
        let dir = TempDir::new().unwrap();
        let keep = ConfigAction::Set("seed-on-missing".into(), "false".into());
        run(&paths(&dir), keep).unwrap();

        let set = ConfigAction::Set("data-file".into(), "config.json".into());
        let result = run(&paths(&dir), set).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);

        let loaded = ShelterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "pets.json");
        assert!(!loaded.seed_on_missing);
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
