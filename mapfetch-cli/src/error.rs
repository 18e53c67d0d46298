//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use mapfetch::config::ConfigFileError;
use mapfetch::fetch::FetchError;
use mapfetch::provider::ProviderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be used
    Config(ConfigFileError),
    /// Provider could not be constructed
    Provider(ProviderError),
    /// Tile or static map could not be fetched
    Fetch(FetchError),
    /// Failed to write output image
    FileWrite { path: String, error: String },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Provider(ProviderError::MissingCredentials) => {
                eprintln!();
                eprintln!("The static map provider needs credentials. Either:");
                eprintln!("  1. pass --key, or set 'key' in the [provider] section");
                eprintln!("  2. pass --client-id and --signature");
            }
            CliError::Fetch(FetchError::TileNotFound { .. }) => {
                eprintln!();
                eprintln!("The provider has no tile at these coordinates.");
                eprintln!("Check that x and y are below 2^zoom.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Provider(e) => write!(f, "Provider error: {}", e),
            CliError::Fetch(e) => write!(f, "Fetch failed: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Provider(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Provider(e)
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_source_message() {
        let err = CliError::from(FetchError::TileNotFound {
            url: "http://tiles.test/1/2/3.png".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Fetch failed: Tile not found: http://tiles.test/1/2/3.png"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = CliError::from(ProviderError::MissingCredentials);
        assert!(err.source().is_some());

        let err = CliError::LoggingInit("already set".to_string());
        assert!(err.source().is_none());
    }
}
