use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use lazyload_types::{Threshold, ThresholdError};
use thiserror::Error;

/// Contents of `~/.lazyload/config.toml`.
///
/// ```toml
/// [entry]
/// threshold = 0.5
/// delay_ms = 1000
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LazyloadConfig {
    pub entry: Option<EntryConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntryConfig {
    /// A roll must exceed this to load the module. Default: 0.5.
    pub threshold: Option<f64>,
    /// Delay before the greeting, in milliseconds. Default: 1000.
    pub delay_ms: Option<u64>,
}

impl EntryConfig {
    pub fn threshold(&self) -> Result<Option<Threshold>, ThresholdError> {
        self.threshold.map(Threshold::new).transpose()
    }

    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        self.delay_ms.map(Duration::from_millis)
    }
}

/// Problems with the config text itself, independent of where it came from.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Threshold(#[from] ThresholdError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [entry] section in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: ThresholdError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }

    fn at(path: &Path, err: ContentError) -> Self {
        let path = path.to_path_buf();
        match err {
            ContentError::Toml(source) => ConfigError::Parse { path, source },
            ContentError::Threshold(source) => ConfigError::Invalid { path, source },
        }
    }
}

impl LazyloadConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when there is no home directory or no config file.
    /// Errors are returned, not logged; the caller decides how loud to be.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
            .map(Some)
            .map_err(|err| ConfigError::at(path, err))
    }

    /// Parse and validate config text. An out-of-range threshold is rejected here.
    pub fn from_toml_str(content: &str) -> Result<Self, ContentError> {
        let config: Self = toml::from_str(content)?;
        if let Some(entry) = &config.entry {
            entry.threshold()?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lazyload").join("config.toml"))
}
