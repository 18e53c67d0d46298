//! Property tests for provider URL builders.

use mapfetch::provider::{
    GoogleStaticConfig, GoogleStaticProvider, ProviderRegistry, StaticMapProvider,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tile_urls_are_pure(zoom in 0u8..=22, x in any::<u32>(), y in any::<u32>()) {
        let registry = ProviderRegistry::builtin();
        for provider in registry.list() {
            let shard = provider.shards().first().map(String::as_str).unwrap_or("");
            let first = provider.tile_url(shard, zoom, x, y);
            let second = provider.tile_url(shard, zoom, x, y);
            prop_assert_eq!(&first, &second);
            prop_assert!(!first.contains('{'), "unreplaced placeholder in {}", first);
        }
    }

    #[test]
    fn tile_urls_carry_coordinates(zoom in 0u8..=22, x in any::<u32>(), y in any::<u32>()) {
        let registry = ProviderRegistry::builtin();
        let osm = registry.lookup("osm").unwrap();
        let url = osm.tile_url("b", zoom, x, y);
        prop_assert_eq!(
            url,
            format!("http://b.tile.openstreetmap.org/{}/{}/{}.png", zoom, x, y)
        );

        let arcgis = registry.lookup("arcgis-worldimagery").unwrap();
        let url = arcgis.tile_url("", zoom, x, y);
        let expected_suffix = format!("/tile/{}/{}/{}", zoom, y, x);
        prop_assert!(url.ends_with(&expected_suffix));
    }

    #[test]
    fn static_urls_are_pure(
        zoom in 0u8..=21,
        lat in -85.0f64..85.0,
        lon in -180.0f64..180.0,
        width in 0u32..=2048,
        height in 0u32..=2048,
    ) {
        let provider = GoogleStaticProvider::new(
            GoogleStaticConfig::with_key("k").style("feature:poi|visibility:off"),
        )
        .unwrap();
        let first = provider.static_url(zoom, lat, lon, width, height);
        let second = provider.static_url(zoom, lat, lon, width, height);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.contains("&size="), width > 0 && height > 0);
        prop_assert_eq!(first.contains("&zoom="), zoom > 0);
        prop_assert_eq!(first.contains("&center="), lat > 0.0 && lon > 0.0);
    }
}
