//! Filesystem tile cache.
//!
//! Stores each payload as a plain file at `<root>/<provider>/<zoom>/<coord>`.
//! Directories are created lazily on the first write for a provider/zoom
//! pair. Files are written in place with truncate-create semantics; there is
//! no locking, so concurrent writers of the same key race and the last one
//! wins.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::cache::{CacheError, CacheKey, TileCache};

/// Default directory creation mode.
pub const DEFAULT_CACHE_PERMISSIONS: u32 = 0o755;

/// Disk cache for raw tile payloads.
#[derive(Debug, Clone)]
pub struct DiskTileCache {
    /// Cache directory root
    root: PathBuf,
    /// Directory creation mode
    permissions: u32,
}

impl DiskTileCache {
    /// Create a disk cache rooted at `root`.
    ///
    /// Nothing is created on disk until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            permissions: DEFAULT_CACHE_PERMISSIONS,
        }
    }

    /// Set the directory creation mode.
    pub fn with_permissions(mut self, permissions: u32) -> Self {
        self.permissions = permissions;
        self
    }

    /// Platform cache directory for mapfetch, e.g. `~/.cache/mapfetch/tiles`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("mapfetch").join("tiles"))
    }

    /// Absolute path of the entry for `key`.
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.relative_path())
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), CacheError> {
        match fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(CacheError::NotADirectory(dir.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let mut builder = fs::DirBuilder::new();
                builder.recursive(true);
                #[cfg(unix)]
                {
                    use std::os::unix::fs::DirBuilderExt;
                    builder.mode(self.permissions);
                }
                builder.create(dir).map_err(|source| CacheError::Io {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            Err(source) => Err(CacheError::Io {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

impl TileCache for DiskTileCache {
    fn root(&self) -> &Path {
        &self.root
    }

    fn permissions(&self) -> u32 {
        self.permissions
    }

    fn read(&self, key: &CacheKey) -> Result<Vec<u8>, CacheError> {
        let path = self.entry_path(key);
        fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CacheError::Miss(path.clone())
            } else {
                CacheError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })
    }

    fn write(&self, key: &CacheKey, data: &[u8]) -> Result<(), CacheError> {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            // Payload files keep the directory mode minus the execute bits.
            options.mode(self.permissions & 0o666);
        }

        let io_err = |source| CacheError::Io {
            path: path.clone(),
            source,
        };
        let mut file = options.open(&path).map_err(io_err)?;
        file.write_all(data).map_err(io_err)?;

        trace!(path = %path.display(), bytes = data.len(), "Cache entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_path_layout() {
        let cache = DiskTileCache::new("/var/cache/tiles");
        let key = CacheKey::for_tile("osm", 17, 19611, 25345);
        assert_eq!(
            cache.entry_path(&key),
            PathBuf::from("/var/cache/tiles/osm/17/19611-25345")
        );
    }

    #[test]
    fn test_read_missing_is_miss() {
        let temp = TempDir::new().unwrap();
        let cache = DiskTileCache::new(temp.path());

        let result = cache.read(&CacheKey::for_tile("osm", 1, 0, 0));
        assert!(matches!(result, Err(CacheError::Miss(_))));
    }

    #[test]
    fn test_read_unopenable_entry_is_io_error() {
        let temp = TempDir::new().unwrap();
        let cache = DiskTileCache::new(temp.path());
        let key = CacheKey::for_tile("osm", 3, 1, 2);
        fs::create_dir_all(cache.entry_path(&key)).unwrap();

        match cache.read(&key) {
            Err(CacheError::Io { path, .. }) => assert_eq!(path, cache.entry_path(&key)),
            other => panic!("Expected CacheError::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let cache = DiskTileCache::new(temp.path());
        let key = CacheKey::for_tile("osm", 17, 19611, 25345);

        cache.write(&key, &[1, 2, 3, 4]).unwrap();

        assert_eq!(cache.read(&key).unwrap(), vec![1, 2, 3, 4]);
        assert!(temp.path().join("osm/17/19611-25345").is_file());
    }

    #[test]
    fn test_directories_created_lazily() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tiles");
        let cache = DiskTileCache::new(&root);

        assert!(!root.exists());
        let _ = cache.read(&CacheKey::for_tile("osm", 3, 1, 1));
        assert!(!root.exists(), "reads must not create directories");

        cache
            .write(&CacheKey::for_tile("osm", 3, 1, 1), b"data")
            .unwrap();
        assert!(root.join("osm").join("3").is_dir());
    }

    #[test]
    fn test_overwrite_truncates() {
        let temp = TempDir::new().unwrap();
        let cache = DiskTileCache::new(temp.path());
        let key = CacheKey::for_tile("osm", 1, 0, 0);

        cache.write(&key, &[9; 64]).unwrap();
        cache.write(&key, &[1, 2]).unwrap();

        assert_eq!(cache.read(&key).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_file_in_place_of_directory() {
        let temp = TempDir::new().unwrap();
        let cache = DiskTileCache::new(temp.path());
        fs::create_dir_all(temp.path().join("osm")).unwrap();
        fs::write(temp.path().join("osm").join("5"), b"not a dir").unwrap();

        let result = cache.write(&CacheKey::for_tile("osm", 5, 1, 1), b"data");
        assert!(matches!(result, Err(CacheError::NotADirectory(_))));
    }

    #[test]
    fn test_permissions_accessors() {
        let cache = DiskTileCache::new("/tmp/x").with_permissions(0o700);
        assert_eq!(cache.permissions(), 0o700);
        assert_eq!(cache.root(), Path::new("/tmp/x"));
        assert_eq!(
            DiskTileCache::new("/tmp/x").permissions(),
            DEFAULT_CACHE_PERMISSIONS
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_payload_files_are_not_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let cache = DiskTileCache::new(temp.path()).with_permissions(0o755);
        let key = CacheKey::for_tile("osm", 2, 1, 1);
        cache.write(&key, b"data").unwrap();

        let mode = fs::metadata(cache.entry_path(&key))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0, "payload file must not be executable");

        let dir_mode = fs::metadata(temp.path().join("osm").join("2"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(dir_mode & 0o100, 0, "directory must be traversable");
    }

    #[test]
    fn test_concurrent_writers_same_key() {
        use std::sync::Arc;
        use std::thread;

        let temp = TempDir::new().unwrap();
        let cache = Arc::new(DiskTileCache::new(temp.path()));
        let key = CacheKey::for_tile("osm", 4, 2, 2);
        let payload = vec![7u8; 4096];

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let key = key.clone();
                let payload = payload.clone();
                thread::spawn(move || cache.write(&key, &payload))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert_eq!(cache.read(&key).unwrap(), payload);
    }
}
