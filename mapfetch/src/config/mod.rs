//! User configuration.
//!
//! Settings are read from an INI file (see [`config_file_path`]):
//!
//! ```ini
//! [provider]
//! name = osm
//! ; static map authentication and styles
//! key = YOUR_API_KEY
//! style = feature:poi|visibility:off
//!
//! [cache]
//! enabled = true
//! directory = ~/.cache/mapfetch/tiles
//! permissions = 755
//!
//! [http]
//! user_agent = my-renderer/1.0
//! timeout = 30
//! ```
//!
//! Missing files and missing keys fall back to defaults.

mod file;
mod parser;
mod settings;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{CacheSettings, ConfigFile, HttpSettings, ProviderSettings, DEFAULT_PROVIDER};
