use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Loads, validates and caches the config. A missing config yields `TConfig::default()`.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }

    /// Stores the defaults when nothing is stored yet.
    pub fn ensure_config_exists(&self) -> Result<(), ConfigError> {
        if self.config_content_provider.get_config_content()?.is_none() {
            self.set_config(&TConfig::default())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
    struct PacingConfig {
        hold_ms: u32,
        label: String,
    }

    impl Default for PacingConfig {
        fn default() -> Self {
            Self {
                hold_ms: 600,
                label: "default".to_string(),
            }
        }
    }

    impl Validate for PacingConfig {
        fn validate(&self) -> Result<(), String> {
            if self.hold_ms == 0 {
                return Err("hold_ms must be positive".to_string());
            }
            Ok(())
        }
    }

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentConfigProvider, PacingConfig, YamlConfigSerializer> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_config_returns_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), PacingConfig::default());
    }

    #[test]
    fn test_set_then_get_returns_same_config() {
        let manager = memory_manager(None);
        let config = PacingConfig {
            hold_ms: 250,
            label: "fast".to_string(),
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let manager = memory_manager(Some("hold_ms: 0\nlabel: broken\n"));
        let result = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_yaml_is_deserialize_error() {
        let manager = memory_manager(Some("hold_ms: [not a number"));
        let result = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_set_invalid_config_fails_and_keeps_cache_empty() {
        let manager = memory_manager(None);
        let invalid = PacingConfig {
            hold_ms: 0,
            label: "zero".to_string(),
        };
        assert!(manager.set_config(&invalid).is_err());
        assert_eq!(manager.get_config().unwrap(), PacingConfig::default());
    }

    #[test]
    fn test_ensure_config_exists_writes_defaults_once() {
        let manager = memory_manager(None);
        manager.ensure_config_exists().unwrap();
        let stored = manager
            .config_content_provider
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(stored.contains("hold_ms: 600"));

        let custom = PacingConfig {
            hold_ms: 120,
            label: "custom".to_string(),
        };
        manager.set_config(&custom).unwrap();
        manager.ensure_config_exists().unwrap();
        assert_eq!(manager.get_config().unwrap(), custom);
    }
}
