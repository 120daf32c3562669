// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog configuration.
//!
//! Configuration is stored in `lq.toml` and includes:
//! - `fields`: the filterable fields, in default order
//! - `options`: named option sets referenced by select fields
//! - `saved_filters`: where saved filters live (default `filters.json`
//!   next to the config file)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use lq_core::{FieldCatalog, FieldDef, FieldType, OptionItem, OptionSet};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "lq.toml";
const CONFIG_DIR_NAME: &str = "lq";
const SAVED_FILTERS_FILE_NAME: &str = "filters.json";

/// Project configuration stored in `lq.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Saved filter file, relative to the config file or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_filters: Option<String>,
    /// Filterable fields. The first one is the default for new rules.
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
    /// Option sets by name (statuses, priorities, assignees, ...).
    #[serde(default)]
    pub options: BTreeMap<String, Vec<OptionItem>>,
}

/// One `[[fields]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub value: String,
    /// Defaults to `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Name of the option set offered by a select field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl Config {
    /// Loads and checks configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        tracing::debug!(path = %path.display(), fields = config.fields.len(), "loaded config");
        Ok(config)
    }

    /// Checks field names are unique and option set references resolve.
    pub fn check(&self) -> Result<()> {
        for (i, field) in self.fields.iter().enumerate() {
            if field.value.trim().is_empty() {
                return Err(Error::Config(format!("field #{} has an empty value", i + 1)));
            }
            if self.fields[..i].iter().any(|f| f.value == field.value) {
                return Err(Error::Config(format!(
                    "field '{}' is defined more than once",
                    field.value
                )));
            }
            if let Some(set) = &field.options {
                if field.field_type != FieldType::Select {
                    return Err(Error::Config(format!(
                        "field '{}' is {} but names option set '{}'; only select fields take options",
                        field.value, field.field_type, set
                    )));
                }
                if !self.options.contains_key(set) {
                    return Err(Error::Config(format!(
                        "field '{}' uses unknown option set '{}'",
                        field.value, set
                    )));
                }
            }
        }
        Ok(())
    }

    /// Builds the field catalog, resolving option sets into each field.
    pub fn catalog(&self) -> FieldCatalog {
        let fields = self
            .fields
            .iter()
            .map(|f| {
                let label = f.label.clone().unwrap_or_else(|| f.value.clone());
                let options = f
                    .options
                    .as_ref()
                    .and_then(|name| self.options.get(name))
                    .cloned()
                    .unwrap_or_default();
                FieldDef::new(f.value.clone(), label, f.field_type).with_options(options)
            })
            .collect();
        FieldCatalog::new(fields)
    }

    /// All option sets, sorted by name.
    pub fn option_sets(&self) -> Vec<OptionSet> {
        self.options
            .iter()
            .map(|(name, options)| OptionSet::new(name.clone(), options.clone()))
            .collect()
    }

    /// Resolves the saved filter file for a config loaded from `config_path`.
    pub fn saved_filters_path(&self, config_path: &Path) -> PathBuf {
        let name = self
            .saved_filters
            .as_deref()
            .unwrap_or(SAVED_FILTERS_FILE_NAME);
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(path)
        }
    }
}

/// Locates the config file.
///
/// An explicit path (from `--config` or `LQ_CONFIG`) must exist. Otherwise
/// `lq.toml` in the current directory is used, then the user config
/// directory (`~/.config/lq/lq.toml` on Linux).
pub fn find_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(Error::ConfigMissing(path.to_path_buf()))
        };
    }

    let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    if let Some(dir) = dirs::config_dir() {
        let user = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if user.is_file() {
            return Ok(user);
        }
    }

    Err(Error::ConfigNotFound)
}

/// Finds and loads the config, returning it with its path.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, PathBuf)> {
    let path = find_config(explicit)?;
    let config = Config::load(&path)?;
    Ok((config, path))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
