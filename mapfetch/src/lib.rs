//! mapfetch - Map tile and static map fetching with a local cache
//!
//! This library addresses many raster map services through one provider
//! abstraction and turns `(provider, zoom, coordinate)` requests into decoded
//! images, via an optional on-disk cache and a single HTTP download.
//!
//! # High-Level API
//!
//! ```no_run
//! use std::sync::Arc;
//! use mapfetch::cache::{DiskTileCache, TileCache};
//! use mapfetch::fetch::Fetcher;
//! use mapfetch::provider::{ProviderRegistry, ReqwestClient};
//! use mapfetch::tile::TileRequest;
//!
//! let registry = ProviderRegistry::builtin();
//! let provider = registry.lookup("osm").expect("built-in provider");
//! let cache: Arc<dyn TileCache> = Arc::new(DiskTileCache::new("/tmp/mapfetch"));
//!
//! let fetcher = Fetcher::new(ReqwestClient::new()?, Some(cache));
//! let tile = fetcher.fetch_tile(provider.as_ref(), TileRequest::new(17, 19611, 25345))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cache;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod provider;
pub mod tile;

/// Version of the mapfetch library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
