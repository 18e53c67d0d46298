//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic.

use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_PERMISSIONS;
use crate::provider::DEFAULT_TIMEOUT_SECS;

/// Provider used when the config names none.
pub const DEFAULT_PROVIDER: &str = "osm";

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Provider settings
    pub provider: ProviderSettings,
    /// Cache settings
    pub cache: CacheSettings,
    /// HTTP settings
    pub http: HttpSettings,
}

/// `[provider]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Registry name of the tile provider
    pub name: String,
    /// Static map API key
    pub key: Option<String>,
    /// Static map client id
    pub client_id: Option<String>,
    /// Signature for `client_id`
    pub signature: Option<String>,
    /// Static map style rules, in file order
    pub styles: Vec<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROVIDER.to_string(),
            key: None,
            client_id: None,
            signature: None,
            styles: Vec::new(),
        }
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    /// Whether downloaded payloads are cached at all
    pub enabled: bool,
    /// Cache root; `None` uses the platform cache directory
    pub directory: Option<PathBuf>,
    /// Directory creation mode
    pub permissions: u32,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: None,
            permissions: DEFAULT_CACHE_PERMISSIONS,
        }
    }
}

/// `[http]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    /// Overrides the default `User-Agent`
    pub user_agent: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
