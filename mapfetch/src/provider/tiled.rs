//! URL-template tile providers.
//!
//! Most public tile services differ only in host, path prefix and shard
//! labels, so they are described by a [`TemplateProvider`]: a URL pattern with
//! placeholders plus metadata.
//!
//! # Placeholders
//!
//! | Placeholder | Replaced with |
//! |-------------|---------------|
//! | `{s}`       | shard label   |
//! | `{z}`       | zoom level    |
//! | `{x}`       | tile column   |
//! | `{y}`       | tile row      |
//!
//! Placeholders may appear in any order, which is how services with an
//! inverted `{y}/{x}` path are expressed.

use crate::provider::{Provider, TileProvider, DEFAULT_TILE_SIZE};

const OSM_ATTRIBUTION: &str = "Maps and Data (c) openstreetmap.org and contributors, ODbL";
const THUNDERFOREST_ATTRIBUTION: &str =
    "Maps (c) Thundeforest; Data (c) OSM and contributors, ODbL";
const STAMEN_ATTRIBUTION: &str = "Maps (c) Stamen; Data (c) OSM and contributors, ODbL";
const CARTO_ATTRIBUTION: &str = "Map (c) Carto [CC BY 3.0] Data (c) OSM and contributors, ODbL.";

/// Tile provider driven by a URL pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateProvider {
    name: String,
    attribution: String,
    url_pattern: String,
    shards: Vec<String>,
    tile_size: u32,
    ignore_not_found: bool,
}

impl TemplateProvider {
    /// Creates a provider with 256px tiles that treats 404 as an error.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique name, also used as cache namespace
    /// * `attribution` - Display attribution
    /// * `url_pattern` - URL with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    /// * `shards` - Sub-domain labels substituted for `{s}`
    pub fn new(
        name: impl Into<String>,
        attribution: impl Into<String>,
        url_pattern: impl Into<String>,
        shards: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            attribution: attribution.into(),
            url_pattern: url_pattern.into(),
            shards: shards.iter().map(|s| s.to_string()).collect(),
            tile_size: DEFAULT_TILE_SIZE,
            ignore_not_found: false,
        }
    }

    /// Set the tile pixel size.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Mark missing tiles as substitutable by blank tiles.
    pub fn with_ignore_not_found(mut self, ignore: bool) -> Self {
        self.ignore_not_found = ignore;
        self
    }

    /// Returns the raw URL pattern.
    pub fn url_pattern(&self) -> &str {
        &self.url_pattern
    }
}

impl Provider for TemplateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribution(&self) -> &str {
        &self.attribution
    }
}

impl TileProvider for TemplateProvider {
    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn ignore_not_found(&self) -> bool {
        self.ignore_not_found
    }

    fn shards(&self) -> &[String] {
        &self.shards
    }

    fn tile_url(&self, shard: &str, zoom: u8, x: u32, y: u32) -> String {
        self.url_pattern
            .replace("{s}", shard)
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

/// OpenStreetMap's standard tile service.
pub fn open_street_map() -> TemplateProvider {
    TemplateProvider::new(
        "osm",
        OSM_ATTRIBUTION,
        "http://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        &["a", "b", "c"],
    )
}

fn thunderforest(variant: &str) -> TemplateProvider {
    TemplateProvider::new(
        format!("thunderforest-{}", variant),
        THUNDERFOREST_ATTRIBUTION,
        format!("https://{{s}}.tile.thunderforest.com/{}/{{z}}/{{x}}/{{y}}.png", variant),
        &["a", "b", "c"],
    )
}

/// Thunderforest 'landscape' style.
pub fn thunderforest_landscape() -> TemplateProvider {
    thunderforest("landscape")
}

/// Thunderforest 'outdoors' style.
pub fn thunderforest_outdoors() -> TemplateProvider {
    thunderforest("outdoors")
}

/// Thunderforest 'transport' style.
pub fn thunderforest_transport() -> TemplateProvider {
    thunderforest("transport")
}

fn stamen(variant: &str) -> TemplateProvider {
    TemplateProvider::new(
        format!("stamen-{}", variant),
        STAMEN_ATTRIBUTION,
        format!("http://{{s}}.tile.stamen.com/{}/{{z}}/{{x}}/{{y}}.png", variant),
        &["a", "b", "c", "d"],
    )
}

/// Stamen 'toner' style.
pub fn stamen_toner() -> TemplateProvider {
    stamen("toner")
}

/// Stamen 'terrain' style.
pub fn stamen_terrain() -> TemplateProvider {
    stamen("terrain")
}

/// OpenTopoMap topographic tiles.
pub fn open_topo_map() -> TemplateProvider {
    TemplateProvider::new(
        "opentopomap",
        "Maps (c) OpenTopoMap [CC-BY-SA]; Data (c) OSM and contributors [ODbL]; Data (c) SRTM",
        "http://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        &["a", "b", "c"],
    )
}

/// Wikimedia's OSM rendering. Single host, no shards.
pub fn wikimedia() -> TemplateProvider {
    TemplateProvider::new(
        "wikimedia",
        "Map (c) Wikimedia; Data (c) OSM and contributors, ODbL.",
        "https://maps.wikimedia.org/osm-intl/{z}/{x}/{y}.png",
        &[],
    )
}

/// OpenCycleMap.
pub fn open_cycle_map() -> TemplateProvider {
    TemplateProvider::new(
        "cycle",
        "Maps and Data (c) openstreetmaps.org and contributors, ODbL",
        "http://{s}.tile.opencyclemap.org/cycle/{z}/{x}/{y}.png",
        &["a", "b"],
    )
}

fn carto(variant: &str) -> TemplateProvider {
    TemplateProvider::new(
        format!("carto-{}", variant),
        CARTO_ATTRIBUTION,
        format!(
            "https://cartodb-basemaps-{{s}}.global.ssl.fastly.net/{}_all/{{z}}/{{x}}/{{y}}.png",
            variant
        ),
        &["a", "b", "c", "d"],
    )
}

/// Carto basemap, light variant.
pub fn carto_light() -> TemplateProvider {
    carto("light")
}

/// Carto basemap, dark variant.
pub fn carto_dark() -> TemplateProvider {
    carto("dark")
}
