//! Provider types and traits

use thiserror::Error;

/// Pixel size shared by every built-in tile service.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Errors that can occur while constructing providers or talking HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Static map provider configured without any authentication.
    #[error("Static map provider requires either an API key or a client id")]
    MissingCredentials,

    /// A client id was given without its URL signature.
    #[error("Client id '{0}' requires a signature")]
    MissingSignature(String),

    /// The HTTP client could not be built or the request never completed.
    #[error("HTTP error: {0}")]
    HttpClient(String),
}

/// Capability shared by every map imagery source.
///
/// The name doubles as the cache namespace, so it must be unique within a
/// registry and stable across runs.
pub trait Provider: Send + Sync {
    /// Returns the provider's name for logging, lookup and cache layout.
    fn name(&self) -> &str;

    /// Returns the attribution text to display alongside rendered maps.
    fn attribution(&self) -> &str;
}

/// A provider serving a grid of fixed-size tiles addressed by `(zoom, x, y)`.
///
/// # URL Building
///
/// [`TileProvider::tile_url`] must be pure: identical inputs give identical
/// output, and no I/O happens while building it.
pub trait TileProvider: Provider {
    /// Returns the pixel size of one (square) tile.
    fn tile_size(&self) -> u32 {
        DEFAULT_TILE_SIZE
    }

    /// Whether a missing tile (HTTP 404) may be replaced by a blank tile.
    fn ignore_not_found(&self) -> bool {
        false
    }

    /// Sub-domain labels of mirrored tile servers, possibly empty.
    fn shards(&self) -> &[String];

    /// Builds the download URL for one tile.
    ///
    /// # Arguments
    ///
    /// * `shard` - One of [`TileProvider::shards`], or `""` when there are none
    /// * `zoom` - Zoom level
    /// * `x` - Tile column
    /// * `y` - Tile row
    fn tile_url(&self, shard: &str, zoom: u8, x: u32, y: u32) -> String;
}

/// A provider composing one image for an arbitrary center, zoom and size.
pub trait StaticMapProvider: Provider {
    /// Size the rendering engine should assume when merging static images.
    fn tile_size(&self) -> u32 {
        DEFAULT_TILE_SIZE
    }

    /// Builds the download URL for one static map.
    ///
    /// Non-positive values for `zoom`, the center, or the size are treated as
    /// "unset" and left out of the URL rather than sent as zero.
    fn static_url(&self, zoom: u8, lat: f64, lon: f64, width: u32, height: u32) -> String;
}
