//! Request and result types for tile and static map fetches.

mod request;

pub use request::{StaticMapRequest, TileRequest};

use image::DynamicImage;

/// A decoded tile bound to the request that produced it.
#[derive(Debug, Clone)]
pub struct FetchedTile {
    pub image: DynamicImage,
    pub request: TileRequest,
}

/// A decoded static map bound to the request that produced it.
#[derive(Debug, Clone)]
pub struct FetchedStaticMap {
    pub image: DynamicImage,
    pub request: StaticMapRequest,
}
