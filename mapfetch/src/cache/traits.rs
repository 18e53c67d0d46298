//! Core trait for tile payload storage.
//!
//! The `TileCache` trait is the seam between the fetch pipeline and whatever
//! persists downloaded bytes. Values are the raw payloads exactly as received
//! from the network; decoding is the caller's business.
//!
//! # Design Principles
//!
//! - **Raw bytes**: no re-encoding, so cached files are byte-identical to the
//!   server response
//! - **Append-only**: no eviction, no TTL, no delete
//! - **Optional**: `Option<Arc<dyn TileCache>>` of `None` disables caching
//! - **Dyn-compatible**: used as `Arc<dyn TileCache>`

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cache::CacheKey;

/// Errors that can occur during cache operations.
///
/// None of these ever fail a fetch: a read error falls through to the
/// network and a write error is logged.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No entry stored for the key.
    #[error("Cache miss: {}", .0.display())]
    Miss(PathBuf),

    /// I/O error while reading or writing an entry.
    #[error("Cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file sits where a cache directory should be.
    #[error("File exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl CacheError {
    /// Whether this is a plain miss rather than a storage fault.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::Miss(_))
    }
}

/// Byte store for downloaded tiles and static maps.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Concurrent writes to the same key
/// may race; payloads for one key are identical, so last-write-wins is fine.
pub trait TileCache: Send + Sync {
    /// Root directory of the store.
    fn root(&self) -> &Path;

    /// Mode used when creating directories (e.g. `0o755`).
    ///
    /// Payload files use the same mode with execute bits removed.
    fn permissions(&self) -> u32;

    /// Read the raw payload stored for `key`.
    ///
    /// # Errors
    ///
    /// - [`CacheError::Miss`] when nothing is stored
    /// - [`CacheError::Io`] when the entry exists but cannot be read
    fn read(&self, key: &CacheKey) -> Result<Vec<u8>, CacheError>;

    /// Store `data` for `key`, replacing any previous payload.
    fn write(&self, key: &CacheKey, data: &[u8]) -> Result<(), CacheError>;
}
