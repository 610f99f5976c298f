use log::debug;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the configured notes directory.
pub const NOTES_PATH_ENV: &str = "MARK_NOTES_PATH";
/// Overrides the configured assets directory.
pub const ASSETS_PATH_ENV: &str = "MARK_ASSETS_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub notes_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_path: Option<PathBuf>,
}

impl Config {
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: notes_path.into(),
            assets_path: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.notes_path = Self::expand_path(&config.notes_path).unwrap_or(config.notes_path);
        config.assets_path = config
            .assets_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, then applies `MARK_NOTES_PATH` and
    /// `MARK_ASSETS_PATH` on top of it.
    pub fn load_with_env() -> Result<Option<Self>, ConfigError> {
        let config = Self::load()?;
        Ok(Self::apply_env(config, |key| std::env::var_os(key)))
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Without a config file the notes path must come from the environment;
    /// an assets path alone is not a usable config.
    pub fn apply_env(
        config: Option<Self>,
        lookup: impl Fn(&str) -> Option<OsString>,
    ) -> Option<Self> {
        let env_path = |key: &str| {
            lookup(key).filter(|v| !v.is_empty()).map(|v| {
                let path = PathBuf::from(v);
                Self::expand_path(&path).unwrap_or(path)
            })
        };

        let mut config = match (config, env_path(NOTES_PATH_ENV)) {
            (Some(mut config), Some(notes)) => {
                debug!("{NOTES_PATH_ENV} overrides notes path");
                config.notes_path = notes;
                config
            }
            (Some(config), None) => config,
            (None, Some(notes)) => Self::new(notes),
            (None, None) => return None,
        };

        if let Some(assets) = env_path(ASSETS_PATH_ENV) {
            debug!("{ASSETS_PATH_ENV} overrides assets path");
            config.assets_path = Some(assets);
        }
        Some(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VAR` references; `None` if a variable is unset.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
