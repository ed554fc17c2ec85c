// SPDX-License-Identifier: MPL-2.0
//! Application configuration stored in a `settings.toml` file.
//!
//! Missing files and malformed TOML both degrade to defaults; a malformed
//! file additionally logs a warning so broken hand edits are noticed.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LocaleSwitcher";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chrome locale override in BCP-47 form (e.g. `fr-FR`).
    #[serde(default)]
    pub language: Option<String>,

    /// URL of the locales query endpoint. When absent the app serves the
    /// built-in demo catalog instead of hitting the network.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Store binding id forwarded to the endpoint.
    #[serde(default)]
    pub binding: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        eprintln!("Malformed settings file, using defaults: {err}");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|err| crate::error::Error::Config(err.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            language: Some("fr-FR".to_string()),
            endpoint: Some("https://store.example/locales".to_string()),
            binding: Some("store-eu".to_string()),
        };
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.endpoint, config.endpoint);
        assert_eq!(loaded.binding, config.binding);
    }

    #[test]
    fn malformed_toml_degrades_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "language = [not toml").expect("failed to write file");

        let loaded = load_from_path(&path).expect("load should not fail");
        assert!(loaded.language.is_none());
        assert!(loaded.endpoint.is_none());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let loaded: Config = toml::from_str("language = \"pt-BR\"").expect("valid toml");
        assert_eq!(loaded.language.as_deref(), Some("pt-BR"));
        assert!(loaded.endpoint.is_none());
        assert!(loaded.binding.is_none());
    }
}
