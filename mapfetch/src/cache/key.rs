//! Cache keys.
//!
//! # Key Format
//!
//! A key is `(provider, zoom, coord)` and maps to `<provider>/<zoom>/<coord>`
//! under the cache root.
//!
//! - Tiles: `coord = "{x}-{y}"`, e.g. `osm/17/19611-25345`
//! - Static maps: `coord = "{lat:.6}-{lon:.6}"`, e.g.
//!   `google-map/19/1.301162-103.857755`

use std::fmt;
use std::path::PathBuf;

/// Identifies one cached payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    provider: String,
    zoom: u8,
    coord: String,
}

impl CacheKey {
    /// Key for a grid tile.
    pub fn for_tile(provider: &str, zoom: u8, x: u32, y: u32) -> Self {
        Self {
            provider: provider.to_string(),
            zoom,
            coord: format!("{}-{}", x, y),
        }
    }

    /// Key for a static map centered on `(lat, lon)`.
    ///
    /// Image size and styles are not part of the key: a later request for
    /// the same provider, zoom and center gets the cached image back even
    /// if it asks for a different size or style set.
    pub fn for_static(provider: &str, zoom: u8, lat: f64, lon: f64) -> Self {
        Self {
            provider: provider.to_string(),
            zoom,
            coord: format!("{:.6}-{:.6}", lat, lon),
        }
    }

    /// Provider name, the top-level cache directory.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Coordinate part of the key, used as the leaf file name.
    pub fn coord(&self) -> &str {
        &self.coord
    }

    /// Path of the entry relative to the cache root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.provider)
            .join(self.zoom.to_string())
            .join(&self.coord)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.provider, self.zoom, self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_key() {
        let key = CacheKey::for_tile("osm", 17, 19611, 25345);
        assert_eq!(key.provider(), "osm");
        assert_eq!(key.zoom(), 17);
        assert_eq!(key.coord(), "19611-25345");
        assert_eq!(key.to_string(), "osm/17/19611-25345");
    }

    #[test]
    fn test_static_key_uses_six_decimals() {
        let key = CacheKey::for_static("google-map", 19, 1.3011624468555132, 103.85775516239742);
        assert_eq!(key.coord(), "1.301162-103.857755");

        let key = CacheKey::for_static("google-map", 3, 2.0, -0.5);
        assert_eq!(key.coord(), "2.000000--0.500000");
    }

    #[test]
    fn test_relative_path() {
        let key = CacheKey::for_tile("carto-dark", 8, 130, 85);
        assert_eq!(
            key.relative_path(),
            PathBuf::from("carto-dark").join("8").join("130-85")
        );
    }

    #[test]
    fn test_distinct_coordinates_give_distinct_keys() {
        assert_ne!(
            CacheKey::for_tile("osm", 1, 12, 3),
            CacheKey::for_tile("osm", 1, 1, 23)
        );
        assert_ne!(
            CacheKey::for_tile("osm", 1, 0, 0),
            CacheKey::for_tile("osm", 2, 0, 0)
        );
    }
}
