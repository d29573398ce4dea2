use serde::{Deserialize, Serialize};

use crate::games::dots::{DEFAULT_HEIGHT, DEFAULT_WIDTH, LuckSettings};
use super::Validate;

pub const MAX_SIDE: u32 = 32;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsConfig {
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub max_path_len: u32,
    pub luck: LuckSettings,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as u32,
            height: DEFAULT_HEIGHT as u32,
            seed: None,
            max_path_len: 8,
            luck: LuckSettings::default(),
        }
    }
}

impl Validate for DotsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 1 || self.width > MAX_SIDE {
            return Err(format!(
                "Board width must be between 1 and {}, got {}",
                MAX_SIDE, self.width
            ));
        }
        if self.height < 1 || self.height > MAX_SIDE {
            return Err(format!(
                "Board height must be between 1 and {}, got {}",
                MAX_SIDE, self.height
            ));
        }
        if self.max_path_len < 2 || self.max_path_len > 16 {
            return Err(format!(
                "Max path length must be between 2 and 16, got {}",
                self.max_path_len
            ));
        }
        self.luck.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DotsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let config = DotsConfig { width: 33, ..DotsConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_luck_settings() {
        let mut config = DotsConfig::default();
        config.luck.modifier = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_short_path_limit() {
        let config = DotsConfig { max_path_len: 1, ..DotsConfig::default() };
        assert!(config.validate().is_err());
    }
}
