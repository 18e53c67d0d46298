//! Tile payload cache.
//!
//! The fetch pipeline stores downloaded bytes through the [`TileCache`]
//! trait. [`DiskTileCache`] is the filesystem implementation.
//!
//! # Example
//!
//! ```no_run
//! use mapfetch::cache::{CacheKey, DiskTileCache, TileCache};
//!
//! let cache = DiskTileCache::new("/tmp/mapfetch");
//! let key = CacheKey::for_tile("osm", 17, 19611, 25345);
//! cache.write(&key, &[0x89, b'P', b'N', b'G'])?;
//! let bytes = cache.read(&key)?;
//! # Ok::<(), mapfetch::cache::CacheError>(())
//! ```

mod disk;
mod key;
mod traits;

pub use disk::{DiskTileCache, DEFAULT_CACHE_PERMISSIONS};
pub use key::CacheKey;
pub use traits::{CacheError, TileCache};
