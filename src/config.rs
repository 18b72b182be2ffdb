// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session configuration loading.

use crate::i18n::Locale;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BOOT_DELAY_MS: u64 = 500;
pub const DEFAULT_PROMPT: &str = "root@quyenlt:~$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub default_locale: Locale,
    /// Delay before the boot welcome appears.
    pub boot_delay_ms: u64,
    /// Whether to show the boot welcome at all.
    pub welcome: bool,
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            boot_delay_ms: DEFAULT_BOOT_DELAY_MS,
            welcome: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading session config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json session config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml session config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported session config extension for {}",
                path.display()
            )),
        }
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_choices() {
        let config = SessionConfig::default();
        assert_eq!(config.default_locale, Locale::Vi);
        assert_eq!(config.boot_delay(), Duration::from_millis(500));
        assert!(config.welcome);
        assert_eq!(config.prompt, "root@quyenlt:~$");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: SessionConfig = serde_yaml::from_str("default_locale: en\n").unwrap();
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.boot_delay_ms, DEFAULT_BOOT_DELAY_MS);
    }

    #[test]
    fn vn_alias_deserializes() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"default_locale": "vn"}"#).unwrap();
        assert_eq!(config.default_locale, Locale::Vi);
    }
}
