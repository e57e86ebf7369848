use crate::criteria::CriterionRegistry;
use crate::error::{ImgsiftError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SORT: &str = "date";

/// Keys accepted by `config get` / `config set`, in display order.
pub const CONFIG_KEYS: [&str; 4] = ["catalog", "sort", "reverse", "groups"];

/// Default view settings, stored in `<config dir>/config.json`.
///
/// CLI flags override these per invocation; viewing never writes them back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    /// Catalog used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default criterion id
    #[serde(default = "default_sort")]
    pub sort: String,

    #[serde(default)]
    pub reverse: bool,

    #[serde(default)]
    pub groups: bool,
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            sort: default_sort(),
            reverse: false,
            groups: false,
        }
    }
}

impl ViewConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ImgsiftError::Io)?;
        let config: ViewConfig =
            serde_json::from_str(&content).map_err(ImgsiftError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ImgsiftError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ImgsiftError::Serialization)?;
        fs::write(config_path, content).map_err(ImgsiftError::Io)?;
        Ok(())
    }

    /// Display value of `key`, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "sort" => Some(self.sort.clone()),
            "reverse" => Some(self.reverse.to_string()),
            "groups" => Some(self.groups.to_string()),
            _ => None,
        }
    }

    /// Set `key` from its text form. An empty catalog clears it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog" => {
                self.catalog = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "sort" => {
                let criterion = CriterionRegistry::global()
                    .resolve(value)
                    .map_err(|e| e.to_string())?;
                self.sort = criterion.id.to_string();
            }
            "reverse" => self.reverse = parse_bool(value)?,
            "groups" => self.groups = parse_bool(value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got '{}'", other)),
    }
}
