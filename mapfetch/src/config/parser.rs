//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [provider] section
    if let Some(section) = ini.section(Some("provider")) {
        if let Some(v) = non_empty(section, "name") {
            config.provider.name = v.to_lowercase();
        }
        config.provider.key = non_empty(section, "key").map(str::to_string);
        config.provider.client_id = non_empty(section, "client_id").map(str::to_string);
        config.provider.signature = non_empty(section, "signature").map(str::to_string);
        config.provider.styles = section
            .get_all("style")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("enabled") {
            config.cache.enabled = parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                section: "cache".to_string(),
                key: "enabled".to_string(),
                value: v.to_string(),
                reason: "must be 'true' or 'false'".to_string(),
            })?;
        }
        if let Some(v) = non_empty(section, "directory") {
            config.cache.directory = Some(expand_tilde(v));
        }
        if let Some(v) = section.get("permissions") {
            config.cache.permissions =
                parse_mode(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "cache".to_string(),
                    key: "permissions".to_string(),
                    value: v.to_string(),
                    reason: "expected an octal mode like '755'".to_string(),
                })?;
        }
    }

    // [http] section
    if let Some(section) = ini.section(Some("http")) {
        config.http.user_agent = non_empty(section, "user_agent").map(str::to_string);
        if let Some(v) = section.get("timeout") {
            config.http.timeout = v
                .trim()
                .parse()
                .ok()
                .filter(|t| *t > 0)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "http".to_string(),
                    key: "timeout".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (seconds)".to_string(),
                })?;
        }
    }

    Ok(config)
}

fn non_empty<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section.get(key).map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Parses an octal mode, with or without a `0o` / `0` prefix.
fn parse_mode(value: &str) -> Option<u32> {
    let v = value.trim();
    let digits = v.strip_prefix("0o").unwrap_or(v);
    u32::from_str_radix(digits, 8)
        .ok()
        .filter(|mode| *mode <= 0o777)
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
