//! `static` command: fetch one static map image.

use std::path::PathBuf;

use clap::Args;
use mapfetch::config::ConfigFile;
use mapfetch::provider::{GoogleStaticConfig, GoogleStaticProvider, Provider};
use mapfetch::tile::StaticMapRequest;
use tracing::info;

use super::common::{build_fetcher, save_image};
use crate::error::CliError;

/// Arguments for the `static` subcommand.
#[derive(Debug, Args)]
pub struct StaticArgs {
    /// Center latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Center longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Zoom level
    #[arg(long, short)]
    pub zoom: u8,

    /// Image width in pixels (0 leaves it to the service)
    #[arg(long, default_value = "0")]
    pub width: u32,

    /// Image height in pixels (0 leaves it to the service)
    #[arg(long, default_value = "0")]
    pub height: u32,

    /// API key, overriding [provider] key
    #[arg(long, conflicts_with = "client_id")]
    pub key: Option<String>,

    /// Client id, overriding [provider] client_id
    #[arg(long, requires = "signature")]
    pub client_id: Option<String>,

    /// URL signature for --client-id
    #[arg(long)]
    pub signature: Option<String>,

    /// Style rule; repeat for several. Replaces the configured styles
    #[arg(long = "style")]
    pub styles: Vec<String>,

    /// Output image path; format is chosen by extension
    #[arg(long, short)]
    pub output: PathBuf,
}

impl StaticArgs {
    /// Merge command-line credentials and styles over the configured ones.
    fn provider_config(&self, config: &ConfigFile) -> GoogleStaticConfig {
        let mut merged = config.google_static_config();

        if let Some(key) = &self.key {
            merged = GoogleStaticConfig::with_key(key.as_str()).styles(merged.styles);
        } else if let (Some(client_id), Some(signature)) = (&self.client_id, &self.signature) {
            merged = GoogleStaticConfig::with_client_id(client_id.as_str(), signature.as_str())
                .styles(merged.styles);
        }

        if !self.styles.is_empty() {
            merged.styles = self.styles.clone();
        }
        merged
    }
}

/// Run the static command.
pub fn run(args: StaticArgs, config: ConfigFile) -> Result<(), CliError> {
    let provider = GoogleStaticProvider::new(args.provider_config(&config))?;
    let fetcher = build_fetcher(&config)?;

    let request = StaticMapRequest::new(args.zoom, args.lat, args.lon)
        .with_size(args.width, args.height);
    let map = fetcher.fetch_static(&provider, request)?;
    save_image(&map.image, &args.output)?;

    info!(provider = provider.name(), "Static map saved");
    println!(
        "Saved static map at {:.6},{:.6} zoom {} to {}",
        args.lat,
        args.lon,
        args.zoom,
        args.output.display()
    );
    println!("{}", provider.attribution());
    Ok(())
}
