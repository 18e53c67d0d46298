//! Logging infrastructure for mapfetch.
//!
//! Provides structured logging via `tracing`:
//! - Compact output to stderr, leaving stdout for command output
//! - Optional plain-text log file, cleared on session start
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Logging options.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set, e.g. `"info"` or `"mapfetch=debug"`
    pub default_filter: String,
    /// Log file to write in addition to stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Default filter for `verbose` (`debug`) or normal (`info`) operation.
    pub fn verbosity(verbose: bool) -> Self {
        Self {
            default_filter: if verbose { "debug" } else { "info" }.to_string(),
            file: None,
        }
    }

    /// Also write logs to `path`.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

/// Initialize logging system.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log file cannot be created or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LoggingGuard, io::Error> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, file_guard) = match &config.file {
        Some(path) => {
            let (dir, name) = prepare_log_file(path)?;
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Creates the parent directory and truncates the log file.
///
/// Returns the directory and file name for the appender.
fn prepare_log_file(path: &Path) -> Result<(PathBuf, PathBuf), io::Error> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path.file_name().map(PathBuf::from).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Log path has no file name: {}", path.display()),
        )
    })?;

    fs::create_dir_all(&dir)?;
    fs::write(dir.join(&name), "")?;
    Ok((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_filter, "info");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(LogConfig::verbosity(true).default_filter, "debug");
        assert_eq!(LogConfig::verbosity(false).default_filter, "info");
        let config = LogConfig::default().with_file("logs/mapfetch.log");
        assert_eq!(config.file, Some(PathBuf::from("logs/mapfetch.log")));
    }

    #[test]
    fn test_prepare_log_file_clears_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("mapfetch.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "old log data").unwrap();

        let (dir, name) = prepare_log_file(&path).unwrap();
        assert_eq!(dir, temp.path().join("nested"));
        assert_eq!(name, PathBuf::from("mapfetch.log"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_prepare_log_file_creates_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("x.log");

        prepare_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard {
            _file_guard: Some(guard),
        };
    }

    // Actual subscriber installation is global and can only happen once per
    // process, so it is exercised by the CLI rather than here.
}
