use std::cell::RefCell;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfig, TProvider = FileContentConfigProvider, TSerializer = YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig, FileContentConfigProvider, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer,
        )
    }
}

impl<TConfig, TProvider, TSerializer> ConfigManager<TConfig, TProvider, TSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: RefCell::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.cached.borrow().as_ref() {
            return Ok(config.clone());
        }

        let config = match self.provider.get_config_content()? {
            Some(content) => self.serializer.deserialize(&content)?.checked()?,
            None => TConfig::default(),
        };

        *self.cached.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        let config = config.clone().checked()?;

        let serialized = self.serializer.serialize(&config)?;
        self.provider.set_config_content(&serialized)?;

        *self.cached.borrow_mut() = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DotsConfig, InMemoryConfigProvider};

    fn manager(provider: InMemoryConfigProvider) -> ConfigManager<DotsConfig, InMemoryConfigProvider> {
        ConfigManager::new(provider, YamlConfigSerializer)
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = manager(InMemoryConfigProvider::default());
        assert_eq!(manager.get_config().unwrap(), DotsConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let manager = manager(InMemoryConfigProvider::with_content("width: 8\nseed: 17\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, DotsConfig::default().height);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.luck.modifier, 15);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = manager(InMemoryConfigProvider::with_content("width: 0\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_set_config_round_trips_through_provider() {
        let manager = manager(InMemoryConfigProvider::default());
        let config = DotsConfig {
            width: 9,
            height: 4,
            ..DotsConfig::default()
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reloaded: ConfigManager<DotsConfig, InMemoryConfigProvider> = ConfigManager::new(
            InMemoryConfigProvider::with_content(&serde_yaml_ng::to_string(&config).unwrap()),
            YamlConfigSerializer,
        );
        assert_eq!(reloaded.get_config().unwrap(), config);
    }

    #[test]
    fn test_set_invalid_config_fails() {
        let manager = manager(InMemoryConfigProvider::default());
        let config = DotsConfig {
            height: 100,
            ..DotsConfig::default()
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), DotsConfig::default());
    }
}
