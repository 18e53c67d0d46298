//! Map tile provider abstraction
//!
//! This module provides the capability traits shared by every map imagery
//! source, the built-in tile services, the Google Static Maps provider and
//! the HTTP client used to download from them.
//!
//! # Capabilities
//!
//! - [`Provider`]: name and attribution
//! - [`TileProvider`]: tile grid addressed by `(zoom, x, y)`, with shards
//! - [`StaticMapProvider`]: one image for a center, zoom and size
//!
//! # Registry
//!
//! Built-in tile services are collected in a [`ProviderRegistry`]:
//!
//! ```
//! use mapfetch::provider::{ProviderRegistry, TileProvider};
//!
//! let registry = ProviderRegistry::builtin();
//! let osm = registry.lookup("osm").unwrap();
//! assert_eq!(
//!     osm.tile_url("a", 17, 19611, 25345),
//!     "http://a.tile.openstreetmap.org/17/19611/25345.png"
//! );
//! ```

mod arcgis;
mod google;
mod http;
mod registry;
mod tiled;
mod types;

pub use arcgis::arcgis_world_imagery;
pub use google::{GoogleStaticConfig, GoogleStaticProvider};
pub use http::{HttpClient, HttpResponse, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use registry::ProviderRegistry;
pub use tiled::{
    carto_dark, carto_light, open_cycle_map, open_street_map, open_topo_map, stamen_terrain,
    stamen_toner, thunderforest_landscape, thunderforest_outdoors, thunderforest_transport,
    wikimedia, TemplateProvider,
};
pub use types::{Provider, ProviderError, StaticMapProvider, TileProvider, DEFAULT_TILE_SIZE};

#[cfg(test)]
pub use http::tests::MockHttpClient;
