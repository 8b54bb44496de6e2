// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, error::Error, fs, path::PathBuf, str::FromStr};

use termcal_core::{APP_NAME, ConvertConfig, FieldMapping, FieldRole};

const TERMCAL_CONFIG_ENV: &str = "TERMCAL_CONFIG";

/// Settings read from the configuration file, merged under CLI flags.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// The `[calendar]` table.
    pub calendar: ConvertConfig,

    /// The `[mapping]` table: field role name to column header.
    pub mapping: HashMap<String, String>,
}

impl ConfigFile {
    /// Turn the `[mapping]` table into a field mapping.
    ///
    /// Unknown keys are rejected so a typo does not silently drop a
    /// column assignment.
    pub fn field_mapping(&self) -> Result<FieldMapping, Box<dyn Error>> {
        let mut mapping = FieldMapping::new();
        for (key, column) in &self.mapping {
            let role = FieldRole::from_str(key).map_err(|_| {
                format!(
                    "unknown field role '{key}' in [mapping], expected one of: {}",
                    role_names()
                )
            })?;
            mapping.set(role, column.clone());
        }
        Ok(mapping)
    }
}

impl FromStr for ConfigFile {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// All accepted field role names, comma separated, for error messages.
pub(crate) fn role_names() -> String {
    FieldRole::ALL.map(|role| role.to_string()).join(", ")
}

/// Locate and parse the configuration file.
///
/// Lookup order: the `--config` flag, the `TERMCAL_CONFIG` environment
/// variable, then `termcal/config.toml` under the user config
/// directory. Every setting has a default, so a missing file at the
/// default location is not an error.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<ConfigFile, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TERMCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!("no config file found, using defaults");
            return Ok(ConfigFile::default());
        }
        config
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
