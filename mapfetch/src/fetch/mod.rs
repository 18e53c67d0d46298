//! Fetch pipeline: cache lookup, download, decode, cache store.
//!
//! ```text
//! CacheLookup ──hit──────────────────────────────► Done(image)
//!      │ miss / unreadable / undecodable
//!      ▼
//! NetworkFetch ──404──► Failed(TileNotFound)
//!      │        ──other status / transport──► Failed(FetchFailed)
//!      ▼ 200
//! Decode ──error──► Failed(DecodeFailed)   (cache untouched)
//!      │
//!      ▼
//! CacheStore ──error is logged──► Done(image)
//! ```
//!
//! Each call makes at most one HTTP request, one cache read and one cache
//! write. There are no retries; callers wanting them layer them on top.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mapfetch::cache::{DiskTileCache, TileCache};
//! use mapfetch::fetch::Fetcher;
//! use mapfetch::provider::{open_street_map, ReqwestClient};
//! use mapfetch::tile::TileRequest;
//!
//! let cache: Arc<dyn TileCache> = Arc::new(DiskTileCache::new("/tmp/mapfetch"));
//! let fetcher = Fetcher::new(ReqwestClient::new()?, Some(cache));
//! let tile = fetcher.fetch_tile(&open_street_map(), TileRequest::new(17, 19611, 25345))?;
//! println!("{}x{}", tile.image.width(), tile.image.height());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::FetchError;

use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, instrument, warn};

use crate::cache::{CacheKey, TileCache};
use crate::provider::{HttpClient, StaticMapProvider, TileProvider};
use crate::tile::{FetchedStaticMap, FetchedTile, StaticMapRequest, TileRequest};

/// User agent sent when the caller does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0+(compatible; mapfetch/",
    env!("CARGO_PKG_VERSION"),
    "; https://github.com/mapfetch/mapfetch)"
);

/// Downloads (or retrieves from the cache) and decodes map images.
///
/// A `Fetcher` holds no per-request state and is `Send + Sync` whenever its
/// client is, so one instance can serve many threads. Concurrent fetches of
/// the same key are not coalesced.
pub struct Fetcher<C: HttpClient> {
    http_client: C,
    cache: Option<Arc<dyn TileCache>>,
    user_agent: String,
}

impl<C: HttpClient> Fetcher<C> {
    /// Creates a fetcher.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for downloads
    /// * `cache` - Payload cache, or `None` to never touch storage
    pub fn new(http_client: C, cache: Option<Arc<dyn TileCache>>) -> Self {
        Self {
            http_client,
            cache,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Replace the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the HTTP user agent string used when downloading.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    /// The `User-Agent` sent with every download.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The configured cache, if caching is enabled.
    pub fn cache(&self) -> Option<&Arc<dyn TileCache>> {
        self.cache.as_ref()
    }

    /// The underlying HTTP client.
    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    /// Fetch one grid tile.
    ///
    /// The shard is the request's own, else the provider's first, else none.
    ///
    /// # Errors
    ///
    /// - [`FetchError::TileNotFound`] on HTTP 404; check
    ///   [`FetchError::is_ignorable_for`] before treating it as fatal
    /// - [`FetchError::FetchFailed`] on any other status or transport error
    /// - [`FetchError::DecodeFailed`] if the payload is not an image
    #[instrument(skip(self, provider), fields(provider = %provider.name()))]
    pub fn fetch_tile(
        &self,
        provider: &dyn TileProvider,
        request: TileRequest,
    ) -> Result<FetchedTile, FetchError> {
        let key = CacheKey::for_tile(provider.name(), request.zoom(), request.x(), request.y());
        let image = self.run(&key, || {
            let shard = request
                .shard()
                .or_else(|| provider.shards().first().map(String::as_str))
                .unwrap_or("");
            provider.tile_url(shard, request.zoom(), request.x(), request.y())
        })?;

        Ok(FetchedTile { image, request })
    }

    /// Fetch one static map image.
    ///
    /// Same error classification as [`Fetcher::fetch_tile`].
    #[instrument(skip(self, provider), fields(provider = %provider.name()))]
    pub fn fetch_static(
        &self,
        provider: &dyn StaticMapProvider,
        request: StaticMapRequest,
    ) -> Result<FetchedStaticMap, FetchError> {
        let key = CacheKey::for_static(
            provider.name(),
            request.zoom(),
            request.lat(),
            request.lon(),
        );
        let image = self.run(&key, || {
            provider.static_url(
                request.zoom(),
                request.lat(),
                request.lon(),
                request.width(),
                request.height(),
            )
        })?;

        Ok(FetchedStaticMap { image, request })
    }

    /// Runs the pipeline for `key`. The URL is only built on a cache miss.
    fn run<F>(&self, key: &CacheKey, build_url: F) -> Result<DynamicImage, FetchError>
    where
        F: FnOnce() -> String,
    {
        if let Some(cache) = &self.cache {
            if let Some(image) = load_cached(cache.as_ref(), key) {
                return Ok(image);
            }
        }

        let url = build_url();
        let data = self.download(&url)?;

        let image = image::load_from_memory(&data).map_err(|e| FetchError::DecodeFailed {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.write(key, &data) {
                warn!(key = %key, error = %e, "Failed to store map tile in cache");
            }
        }

        Ok(image)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url = %url, "Downloading");

        let response = self
            .http_client
            .get(url, &self.user_agent)
            .map_err(|e| FetchError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        match response.status {
            200 => Ok(response.body),
            404 => Err(FetchError::TileNotFound {
                url: url.to_string(),
            }),
            _ => Err(FetchError::FetchFailed {
                url: url.to_string(),
                reason: response.status_text,
            }),
        }
    }
}

/// Reads and decodes a cached payload. Any failure is a miss.
fn load_cached(cache: &dyn TileCache, key: &CacheKey) -> Option<DynamicImage> {
    let data = match cache.read(key) {
        Ok(data) => data,
        Err(e) => {
            debug!(key = %key, reason = %e, "Cache miss");
            return None;
        }
    };

    match image::load_from_memory(&data) {
        Ok(image) => {
            debug!(key = %key, "Cache hit");
            Some(image)
        }
        Err(e) => {
            debug!(key = %key, error = %e, "Cached payload is not a valid image");
            None
        }
    }
}
