//! Fetch request types.
//!
//! Tile providers and static-map providers take different inputs: integer
//! grid coordinates versus a geographic center with an image size. The two
//! shapes are separate types so one cannot be passed where the other is
//! expected.

/// Request for one grid tile.
///
/// # Note
///
/// The x/y values are unsigned tile indices in the Web Mercator grid:
/// - x increases eastward (column)
/// - y increases southward (row)
///
/// # Example
///
/// ```
/// use mapfetch::tile::TileRequest;
///
/// let request = TileRequest::new(17, 19611, 25345).with_shard("b");
/// assert_eq!(request.zoom(), 17);
/// assert_eq!(request.x(), 19611);
/// assert_eq!(request.y(), 25345);
/// assert_eq!(request.shard(), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileRequest {
    /// Zoom level
    zoom: u8,
    /// Tile column
    x: u32,
    /// Tile row
    y: u32,
    /// Shard chosen by the caller, if any
    shard: Option<String>,
}

impl TileRequest {
    /// Create a new tile request.
    ///
    /// # Arguments
    ///
    /// * `zoom` - Zoom level
    /// * `x` - Tile column in the Web Mercator grid
    /// * `y` - Tile row in the Web Mercator grid
    pub fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self {
            zoom,
            x,
            y,
            shard: None,
        }
    }

    /// Download from a specific shard of the provider.
    pub fn with_shard(mut self, shard: impl Into<String>) -> Self {
        self.shard = Some(shard.into());
        self
    }

    /// Get the zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Get the tile column.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Get the tile row.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Get the requested shard.
    pub fn shard(&self) -> Option<&str> {
        self.shard.as_deref()
    }
}

/// Request for one static map image.
///
/// A zero `width`/`height` or `zoom` means "provider default".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticMapRequest {
    zoom: u8,
    lat: f64,
    lon: f64,
    width: u32,
    height: u32,
}

impl StaticMapRequest {
    /// Create a request centered on `(lat, lon)` with the provider's default size.
    pub fn new(zoom: u8, lat: f64, lon: f64) -> Self {
        Self {
            zoom,
            lat,
            lon,
            width: 0,
            height: 0,
        }
    }

    /// Set the image size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Center latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Center longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Image width in pixels; 0 leaves it to the service.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels; 0 leaves it to the service.
    pub fn height(&self) -> u32 {
        self.height
    }
}
