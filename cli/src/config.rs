/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, anyhow};
use connector::RequestConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub const SERVER_ENV: &str = "RECIPES_SERVER";

pub type Config = HashMap<ConfigKey, Option<String>>;

#[derive(Clone, Copy, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    Server,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| key.to_string() == s.to_lowercase())
            .ok_or_else(|| {
                let valid = ConfigKey::iter()
                    .map(|key| key.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Invalid key: {}. Valid keys are: {}", s, valid)
            })
    }
}

pub fn get_config_file() -> Result<PathBuf> {
    let mut config_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("Could not find configuration directory"))?;
    config_dir.push("recipes");
    config_dir.push("config.toml");
    Ok(config_dir)
}

pub fn load_config_from(config_file: &Path) -> Result<Config> {
    if !config_file.exists() {
        return Ok(ConfigKey::iter().map(|key| (key, None)).collect());
    }

    let contents = fs::read_to_string(config_file).with_context(|| {
        format!(
            "Failed to read configuration file {}",
            config_file.display()
        )
    })?;

    toml::from_str(&contents).context("Failed to parse configuration file")
}

pub fn save_config_to(config_file: &Path, config: &Config) -> Result<()> {
    if let Some(config_dir) = config_file.parent() {
        fs::create_dir_all(config_dir).context("Failed to create configuration directory")?;
    }

    // toml has no null, unset keys are left out of the file
    let present: HashMap<&ConfigKey, &String> = config
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|value| (key, value)))
        .collect();

    let contents = toml::to_string_pretty(&present).context("Failed to serialize configuration")?;
    fs::write(config_file, contents).context("Failed to write configuration file")
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_file()?)
}

/// Reads `key`, or stores `value` under it when given. Returns the value now in effect.
pub fn set_get_value(config_file: &Path, key: ConfigKey, value: Option<String>) -> Result<Option<String>> {
    let mut config = load_config_from(config_file)?;

    if let Some(value) = value {
        config.insert(key, Some(value.clone()));
        save_config_to(config_file, &config)?;
        return Ok(Some(value));
    }

    Ok(config.get(&key).cloned().flatten())
}

/// The environment wins over the configuration file.
pub fn server_url(config: &Config, env_override: Option<String>) -> Option<String> {
    env_override
        .filter(|url| !url.trim().is_empty())
        .or_else(|| config.get(&ConfigKey::Server).cloned().flatten())
}

pub fn get_request_config(config: &Config) -> Result<RequestConfig> {
    let server_url = server_url(config, std::env::var(SERVER_ENV).ok()).ok_or_else(|| {
        anyhow!(
            "Server URL not set. Use `recipes config server <url>` or set {}.",
            SERVER_ENV
        )
    })?;

    Ok(RequestConfig { server_url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("recipes-cli-{}-{}", name, std::process::id()));
        path.push("config.toml");
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_config_key_parsing() {
        assert_eq!("server".parse::<ConfigKey>(), Ok(ConfigKey::Server));
        assert_eq!("SERVER".parse::<ConfigKey>(), Ok(ConfigKey::Server));
        assert!("token".parse::<ConfigKey>().unwrap_err().contains("server"));
    }

    #[test]
    fn test_missing_file_yields_unset_keys() {
        let path = temp_config_file("missing");
        let config = load_config_from(&path).unwrap();

        assert_eq!(config.get(&ConfigKey::Server), Some(&None));
    }

    #[test]
    fn test_set_then_get() {
        let path = temp_config_file("set-get");

        let set = set_get_value(&path, ConfigKey::Server, Some("http://localhost:8082".to_string()))
            .unwrap();
        assert_eq!(set.as_deref(), Some("http://localhost:8082"));

        let got = set_get_value(&path, ConfigKey::Server, None).unwrap();
        assert_eq!(got.as_deref(), Some("http://localhost:8082"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::new();
        config.insert(ConfigKey::Server, Some("http://file:8082".to_string()));

        assert_eq!(
            server_url(&config, Some("http://env:8082".to_string())).as_deref(),
            Some("http://env:8082")
        );
        assert_eq!(
            server_url(&config, Some(" ".to_string())).as_deref(),
            Some("http://file:8082")
        );
        assert_eq!(server_url(&Config::new(), None), None);
    }
}
