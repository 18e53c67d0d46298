//! `tile` command: fetch one grid tile and save it as an image file.

use std::path::PathBuf;

use clap::Args;
use image::{DynamicImage, RgbaImage};
use mapfetch::config::ConfigFile;
use mapfetch::fetch::Fetcher;
use mapfetch::provider::{HttpClient, ProviderRegistry, TileProvider};
use mapfetch::tile::TileRequest;
use tracing::{info, warn};

use super::common::{build_fetcher, save_image};
use crate::error::CliError;

/// Arguments for the `tile` subcommand.
#[derive(Debug, Args)]
pub struct TileArgs {
    /// Provider name (default: [provider] name from the config, else osm)
    #[arg(long, short)]
    pub provider: Option<String>,

    /// Zoom level
    #[arg(long, short)]
    pub zoom: u8,

    /// Tile column
    #[arg(long, short)]
    pub x: u32,

    /// Tile row
    #[arg(long, short)]
    pub y: u32,

    /// Server shard; defaults to the provider's first shard
    #[arg(long)]
    pub shard: Option<String>,

    /// Output image path; format is chosen by extension
    #[arg(long, short)]
    pub output: PathBuf,
}

/// Run the tile command.
pub fn run(
    args: TileArgs,
    mut config: ConfigFile,
    registry: &ProviderRegistry,
) -> Result<(), CliError> {
    if let Some(name) = &args.provider {
        config.provider.name = name.clone();
    }
    let provider = config.tile_provider(registry)?;
    let fetcher = build_fetcher(&config)?;

    let mut request = TileRequest::new(args.zoom, args.x, args.y);
    if let Some(shard) = &args.shard {
        request = request.with_shard(shard.as_str());
    }

    let image = fetch_or_blank(&fetcher, provider.as_ref(), request)?;
    save_image(&image, &args.output)?;

    print_summary(provider.as_ref(), &args);
    Ok(())
}

/// Fetch a tile, substituting a transparent tile where the provider allows it.
fn fetch_or_blank<C: HttpClient>(
    fetcher: &Fetcher<C>,
    provider: &dyn TileProvider,
    request: TileRequest,
) -> Result<DynamicImage, CliError> {
    match fetcher.fetch_tile(provider, request) {
        Ok(tile) => Ok(tile.image),
        Err(e) if e.is_ignorable_for(provider) => {
            warn!(url = %e.url(), "Tile missing upstream, writing blank tile");
            let size = provider.tile_size();
            Ok(DynamicImage::ImageRgba8(RgbaImage::new(size, size)))
        }
        Err(e) => Err(e.into()),
    }
}

fn print_summary(provider: &dyn TileProvider, args: &TileArgs) {
    info!(provider = provider.name(), "Tile saved");
    println!(
        "Saved {} tile {}/{}/{} to {}",
        provider.name(),
        args.zoom,
        args.x,
        args.y,
        args.output.display()
    );
    if !provider.attribution().is_empty() {
        println!("{}", provider.attribution());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapfetch::provider::{HttpResponse, ProviderError, TemplateProvider};

    struct StatusClient(u16);

    impl HttpClient for StatusClient {
        fn get(&self, _url: &str, _user_agent: &str) -> Result<HttpResponse, ProviderError> {
            Ok(HttpResponse::status(self.0, format!("{} Error", self.0)))
        }
    }

    fn provider(ignore_not_found: bool) -> TemplateProvider {
        TemplateProvider::new("test", "", "http://tiles.test/{z}/{x}/{y}.png", &[])
            .with_tile_size(512)
            .with_ignore_not_found(ignore_not_found)
    }

    #[test]
    fn test_missing_tile_becomes_blank_when_allowed() {
        let fetcher = Fetcher::new(StatusClient(404), None);
        let image = fetch_or_blank(&fetcher, &provider(true), TileRequest::new(3, 1, 1)).unwrap();
        assert_eq!((image.width(), image.height()), (512, 512));
    }

    #[test]
    fn test_missing_tile_is_error_by_default() {
        let fetcher = Fetcher::new(StatusClient(404), None);
        let result = fetch_or_blank(&fetcher, &provider(false), TileRequest::new(3, 1, 1));
        assert!(matches!(result, Err(CliError::Fetch(e)) if e.is_not_found()));
    }

    #[test]
    fn test_server_error_never_becomes_blank() {
        let fetcher = Fetcher::new(StatusClient(500), None);
        let result = fetch_or_blank(&fetcher, &provider(true), TileRequest::new(3, 1, 1));
        assert!(matches!(result, Err(CliError::Fetch(_))));
    }
}
