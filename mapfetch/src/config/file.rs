//! Configuration file handling for `<config dir>/mapfetch/config.ini`.
//!
//! Loads user configuration with sensible defaults and turns it into the
//! objects the fetch pipeline needs. Settings structs live in
//! [`super::settings`], parsing in [`super::parser`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ini::Ini;
use thiserror::Error;
use tracing::warn;

use super::settings::ConfigFile;
use crate::cache::{DiskTileCache, TileCache};
use crate::provider::{
    GoogleStaticConfig, ProviderError, ProviderRegistry, ReqwestClient, TileProvider,
};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Provider name not present in the registry
    #[error("Unknown provider '{name}'. Available: {available}")]
    UnknownProvider { name: String, available: String },
}

impl ConfigFile {
    /// Load configuration from the default path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn parse_str(content: &str) -> Result<Self, ConfigFileError> {
        let ini = Ini::load_from_str(content).map_err(ini::Error::Parse)?;
        super::parser::parse_ini(&ini)
    }

    /// Resolve the configured tile provider in `registry`.
    pub fn tile_provider(
        &self,
        registry: &ProviderRegistry,
    ) -> Result<Arc<dyn TileProvider>, ConfigFileError> {
        registry
            .lookup(&self.provider.name)
            .ok_or_else(|| ConfigFileError::UnknownProvider {
                name: self.provider.name.clone(),
                available: registry.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Static map options from the `[provider]` section.
    pub fn google_static_config(&self) -> GoogleStaticConfig {
        GoogleStaticConfig {
            key: self.provider.key.clone(),
            client_id: self.provider.client_id.clone(),
            signature: self.provider.signature.clone(),
            styles: self.provider.styles.clone(),
        }
    }

    /// Build the disk cache, or `None` when caching is disabled.
    ///
    /// Without a configured directory the platform cache directory is used;
    /// if that cannot be determined either, caching is turned off.
    pub fn build_cache(&self) -> Option<Arc<dyn TileCache>> {
        if !self.cache.enabled {
            return None;
        }

        let root = match self.cache.directory.clone().or_else(DiskTileCache::default_root) {
            Some(root) => root,
            None => {
                warn!("No cache directory configured and no platform default; caching disabled");
                return None;
            }
        };

        Some(Arc::new(
            DiskTileCache::new(root).with_permissions(self.cache.permissions),
        ))
    }

    /// Build an HTTP client honoring `[http] timeout`.
    pub fn build_http_client(&self) -> Result<ReqwestClient, ProviderError> {
        ReqwestClient::with_timeout(self.http.timeout)
    }
}

/// Get the config directory (`<platform config dir>/mapfetch`).
pub fn config_directory() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mapfetch")
}

/// Get the path to the config file.
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
