// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and filesystem storage for the sampling profile.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

/// Byte-level storage behind [`ConfigService`], keyed by logical name.
pub trait ConfigStore {
    /// Reads the blob stored under `key`; `ConfigError::NotFound` if absent.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failures while reading or writing a saved profile.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("no saved config under this key")]
    NotFound,
    /// The platform has no per-user config directory (no home dir).
    #[error("could not resolve a per-user config directory")]
    NoConfigDir,
    /// Filesystem failure.
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    /// Stored JSON did not match the expected shape.
    #[error("config json: {0}")]
    Serde(#[from] serde_json::Error),
}

/// JSON codec over a [`ConfigStore`], used for the sampling profile saved
/// under [`PROFILE_KEY`](crate::profile::PROFILE_KEY).
///
/// A first run has no profile yet, so a missing or empty blob loads as
/// `None` and the caller falls back to the default
/// [`SamplingProfile`](crate::profile::SamplingProfile).
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decodes the profile (or other value) saved under `key`.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => None,
            Ok(bytes) => Some(bytes),
            Err(ConfigError::NotFound) => None,
            Err(err) => return Err(err),
        };
        let Some(bytes) = bytes else {
            debug!(key, "no saved config; using defaults");
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Writes `value` under `key` as pretty JSON with a trailing newline so
    /// the profile file stays friendly to hand edits.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let mut data = serde_json::to_vec_pretty(value)?;
        data.push(b'\n');
        debug!(key, bytes = data.len(), "saving config");
        self.store.save_raw(key, &data)
    }
}

/// Stores configs as `<key>.json` files under one directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the user config directory (e.g. `~/.config/Echo`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj =
            ProjectDirs::from("dev", "flyingrobots", "Echo").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Store rooted at an explicit directory; created lazily on first save.
    pub fn at(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.path_for(key), data)?;
        Ok(())
    }
}
