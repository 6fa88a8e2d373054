use anyhow::{bail, Context, Result};
use ddbmap::{GenOption, OptionSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE_VERSION: u32 = 1;

/// Persisted defaults for the generation options.
///
/// The file stores option identifiers as strings; identifiers written by
/// a newer version of the tool are ignored rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Config file format version
    version: u32,

    /// Identifiers of options enabled by default
    options: Vec<String>,
}

impl ConfigFile {
    /// Create a new empty config file
    pub fn new() -> Self {
        Self {
            version: CONFIG_FILE_VERSION,
            options: Vec::new(),
        }
    }

    /// Default location: `$XDG_CONFIG_HOME/ddbmap/config.toml`, falling
    /// back to `~/.config/ddbmap/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

        Some(base.join("ddbmap").join("config.toml"))
    }

    /// Load a config file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    /// Save the config file to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Loads the config file, or returns an empty one if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }

    /// Options enabled by default. Unrecognized identifiers are ignored.
    pub fn options(&self) -> OptionSet {
        self.options
            .iter()
            .filter_map(|property| GenOption::from_property(property))
            .collect()
    }

    /// Replaces the persisted defaults with the given set.
    pub fn set_options(&mut self, options: &OptionSet) {
        self.options = options
            .iter()
            .map(|option| option.property().to_string())
            .collect();
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ConfigFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s)?;

        // Validate version
        if file.version != CONFIG_FILE_VERSION {
            bail!(
                "Unsupported config file version: {}. Expected version {}",
                file.version,
                CONFIG_FILE_VERSION
            );
        }

        Ok(file)
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}
