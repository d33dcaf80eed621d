use crate::report::OutputFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, io, path::{Path, PathBuf}};

const DEFAULT_START: &str = "@radiantmood";
const DEFAULT_END: &str = "atom@android";

/// Settings loaded from the config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The string to start morphing from.
    #[serde(default = "default_start")]
    pub start: String,

    /// The string to morph into.
    #[serde(default = "default_end")]
    pub end: String,

    /// How swap plans are printed.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether to morph back into the start string once done.
    #[serde(default)]
    pub round_trip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { start: default_start(), end: default_end(), format: OutputFormat::default(), round_trip: false }
    }
}

impl Config {
    /// Load the config file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ConfigError::NotFound(path.into())),
            Err(e) => return Err(e.into()),
        };
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the config file at the default location, if there's one.
    pub fn load_default() -> Result<Self, ConfigError> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => {
                log::debug!("no config file found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// The path where the config file lives by default.
    pub fn default_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", "anagram-morph")?;
        Some(dirs.config_dir().join("config.yaml"))
    }
}

fn default_start() -> String {
    DEFAULT_START.into()
}

fn default_end() -> String {
    DEFAULT_END.into()
}

/// An error when loading a config file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_yaml::Error),
}
