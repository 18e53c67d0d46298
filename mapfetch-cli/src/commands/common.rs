//! Common types and utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use clap::Args;
use image::DynamicImage;
use mapfetch::config::{config_file_path, ConfigFile};
use mapfetch::fetch::Fetcher;
use mapfetch::logging::LogConfig;
use mapfetch::provider::ReqwestClient;
use tracing::debug;

use crate::error::CliError;

/// Options accepted by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Configuration file (default: <config dir>/mapfetch/config.ini)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bypass the tile cache entirely
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Cache directory, overriding the configuration file
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file (truncated on start)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logging options for the selected verbosity and log file.
    pub fn log_config(&self) -> LogConfig {
        let config = LogConfig::verbosity(self.verbose);
        match &self.log_file {
            Some(path) => config.with_file(path.clone()),
            None => config,
        }
    }

    /// Load the configuration file and apply command-line overrides.
    pub fn load_config(&self) -> Result<ConfigFile, CliError> {
        let path = self.config.clone().unwrap_or_else(config_file_path);
        debug!(path = %path.display(), "Loading configuration");

        let mut config = ConfigFile::load_from(&path)?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut ConfigFile) {
        if self.no_cache {
            config.cache.enabled = false;
        }
        if let Some(dir) = &self.cache_dir {
            config.cache.directory = Some(dir.clone());
        }
        if let Some(agent) = &self.user_agent {
            config.http.user_agent = Some(agent.clone());
        }
    }
}

/// Build a fetcher from the resolved configuration.
pub fn build_fetcher(config: &ConfigFile) -> Result<Fetcher<ReqwestClient>, CliError> {
    let http_client = config.build_http_client()?;
    let mut fetcher = Fetcher::new(http_client, config.build_cache());
    if let Some(agent) = &config.http.user_agent {
        fetcher.set_user_agent(agent.clone());
    }
    Ok(fetcher)
}

/// Save `image` to `path`, format chosen by extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<(), CliError> {
    image.save(path).map_err(|e| CliError::FileWrite {
        path: path.display().to_string(),
        error: e.to_string(),
    })
}
