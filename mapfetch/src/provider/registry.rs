//! Named collection of tile providers.
//!
//! The registry is an ordinary value: build it once at startup and pass it to
//! whatever composes requests. Tests build isolated registries with
//! [`ProviderRegistry::new`].

use std::sync::Arc;

use crate::provider::{
    arcgis_world_imagery, carto_dark, carto_light, open_cycle_map, open_street_map,
    open_topo_map, stamen_terrain, stamen_toner, thunderforest_landscape,
    thunderforest_outdoors, thunderforest_transport, wikimedia, TileProvider,
};

/// Ordered, read-only set of tile providers addressable by name.
#[derive(Clone)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn TileProvider>>,
}

impl ProviderRegistry {
    /// Builds a registry from `providers`.
    ///
    /// A provider whose name repeats an earlier one replaces it in place, so
    /// names stay unique and ordering stays stable.
    pub fn new<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn TileProvider>>,
    {
        let mut list: Vec<Arc<dyn TileProvider>> = Vec::new();
        for provider in providers {
            match list.iter().position(|p| p.name() == provider.name()) {
                Some(index) => list[index] = provider,
                None => list.push(provider),
            }
        }
        Self { providers: list }
    }

    /// Registry holding every built-in tile service.
    pub fn builtin() -> Self {
        let builtins: Vec<Arc<dyn TileProvider>> = vec![
            Arc::new(thunderforest_landscape()),
            Arc::new(thunderforest_outdoors()),
            Arc::new(thunderforest_transport()),
            Arc::new(stamen_toner()),
            Arc::new(stamen_terrain()),
            Arc::new(open_topo_map()),
            Arc::new(open_street_map()),
            Arc::new(open_cycle_map()),
            Arc::new(carto_light()),
            Arc::new(carto_dark()),
            Arc::new(arcgis_world_imagery()),
            Arc::new(wikimedia()),
        ];
        Self::new(builtins)
    }

    /// All providers in registration order.
    pub fn list(&self) -> &[Arc<dyn TileProvider>] {
        &self.providers
    }

    /// Provider names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.name())
    }

    /// Finds a provider by name.
    ///
    /// Returns `None` for unknown names; callers treat that as a
    /// configuration error.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn TileProvider>> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(Arc::clone)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TemplateProvider;

    #[test]
    fn test_builtin_contains_all_services() {
        let registry = ProviderRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "thunderforest-landscape",
                "thunderforest-outdoors",
                "thunderforest-transport",
                "stamen-toner",
                "stamen-terrain",
                "opentopomap",
                "osm",
                "cycle",
                "carto-light",
                "carto-dark",
                "arcgis-worldimagery",
                "wikimedia",
            ]
        );
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_lookup_known_provider() {
        let registry = ProviderRegistry::builtin();
        let osm = registry.lookup("osm").expect("osm should be registered");
        assert_eq!(osm.name(), "osm");
        assert_eq!(osm.tile_size(), 256);
    }

    #[test]
    fn test_lookup_unknown_provider() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.lookup("does-not-exist").is_none());
    }

    #[test]
    fn test_isolated_registry_with_custom_provider() {
        let custom: Arc<dyn TileProvider> = Arc::new(TemplateProvider::new(
            "local",
            "Local tiles",
            "http://localhost:8080/{z}/{x}/{y}.png",
            &[],
        ));
        let registry = ProviderRegistry::new(vec![custom]);

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("osm").is_none());
        let local = registry.lookup("local").unwrap();
        assert_eq!(
            local.tile_url("", 1, 2, 3),
            "http://localhost:8080/1/2/3.png"
        );
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let first: Arc<dyn TileProvider> =
            Arc::new(TemplateProvider::new("dup", "first", "http://one/{z}/{x}/{y}", &[]));
        let other: Arc<dyn TileProvider> = Arc::new(open_street_map());
        let second: Arc<dyn TileProvider> =
            Arc::new(TemplateProvider::new("dup", "second", "http://two/{z}/{x}/{y}", &[]));

        let registry = ProviderRegistry::new(vec![first, other, second]);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["dup", "osm"]);
        assert_eq!(registry.lookup("dup").unwrap().attribution(), "second");
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
    }
}
