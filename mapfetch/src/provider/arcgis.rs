//! ArcGIS World Imagery provider.
//!
//! Provides access to Esri's World Imagery basemap, which offers high-resolution
//! satellite and aerial imagery with global coverage.
//!
//! # URL Pattern
//!
//! `https://server.arcgisonline.com/arcgis/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}`
//!
//! - Row comes before column in the path, the reverse of the other built-ins
//! - No authentication required for the public tier
//! - Single host, no shards
//!
//! # Terms of Use
//!
//! The World Imagery basemap is provided by Esri and is subject to their
//! terms of use. See: <https://www.esri.com/en-us/legal/terms/full-master-agreement>

use crate::provider::TemplateProvider;

/// Base URL for ArcGIS World Imagery tiles.
const ARCGIS_BASE_URL: &str =
    "https://server.arcgisonline.com/arcgis/rest/services/World_Imagery/MapServer/tile";

const ARCGIS_ATTRIBUTION: &str = "Source: Esri, Maxar, GeoEye, Earthstar Geographics, CNES/Airbus DS, USDA, USGS, AeroGRID, IGN, and the GIS User Community";

/// ArcGIS World Imagery satellite provider.
///
/// # Example
///
/// ```
/// use mapfetch::provider::{arcgis_world_imagery, TileProvider};
///
/// let provider = arcgis_world_imagery();
/// let url = provider.tile_url("", 15, 200, 100);
/// assert!(url.ends_with("/tile/15/100/200"));
/// ```
pub fn arcgis_world_imagery() -> TemplateProvider {
    TemplateProvider::new(
        "arcgis-worldimagery",
        ARCGIS_ATTRIBUTION,
        format!("{}/{{z}}/{{y}}/{{x}}", ARCGIS_BASE_URL),
        &[],
    )
}
