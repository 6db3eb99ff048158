use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::simone::SimoneSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{DisplayConfig, KeyBindings, LogConfig, SeedConfig};

const CONFIG_FILE_NAME: &str = "simone_config.yaml";

pub type SimoneConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Manager for `path`, or for the config file next to the executable.
pub fn get_config_manager(path: Option<PathBuf>) -> SimoneConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub timings: SimoneSettings,
    pub seeds: Option<SeedConfig>,
    pub display: DisplayConfig,
    pub keys: KeyBindings,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.timings.validate()?;
        if let Some(seeds) = &self.seeds {
            seeds.validate()?;
        }
        self.display.validate()?;
        self.keys.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timings: SimoneSettings::default(),
            seeds: None,
            display: DisplayConfig::default(),
            keys: KeyBindings::default(),
            log: LogConfig::default(),
        }
    }
}
