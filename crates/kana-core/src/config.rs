//! Engine configuration, deserialized from TOML.
//!
//! Instance-based and passed in by the host — there is no global singleton;
//! two forms on one page may run different modes.

use serde::Deserialize;
use thiserror::Error;

use crate::translit::KanaMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Target script for the kana field.
    pub mode: KanaMode,
    /// Auto-fill from the backend when IME commit contains kanji.
    /// Off by default: a wrong automatic reading over a correct manual one
    /// is worse than requiring the explicit convert action.
    pub fill_on_kanji_commit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: KanaMode::Katakana,
            fill_on_kanji_commit: false,
        }
    }
}

impl EngineConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
