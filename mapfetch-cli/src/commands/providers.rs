//! `providers` command: list the built-in tile providers.

use mapfetch::provider::{ProviderRegistry, TileProvider};

/// Print every registered provider with its tile size and attribution.
pub fn run(registry: &ProviderRegistry) {
    println!("Available tile providers:");
    println!();
    for provider in registry.list() {
        println!("  {}", describe(provider.as_ref()));
    }
}

fn describe(provider: &dyn TileProvider) -> String {
    let size = format!("{}px", provider.tile_size());
    if provider.attribution().is_empty() {
        format!("{:<22} {}", provider.name(), size)
    } else {
        format!("{:<22} {:<6} {}", provider.name(), size, provider.attribution())
    }
}
