//! Error types for fetch operations.

use thiserror::Error;

use crate::provider::TileProvider;

/// Errors surfaced by [`Fetcher`](super::Fetcher).
///
/// Cache failures never appear here; they degrade the request to an
/// uncached fetch instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered 404.
    #[error("Tile not found: {url}")]
    TileNotFound { url: String },

    /// Any other HTTP status, or no response at all.
    #[error("GET {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// The payload is not a decodable image.
    #[error("Failed to decode image from {url}: {reason}")]
    DecodeFailed { url: String, reason: String },
}

impl FetchError {
    /// Whether the server reported the tile as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::TileNotFound { .. })
    }

    /// Whether `provider` allows this error to be replaced by a blank tile.
    pub fn is_ignorable_for(&self, provider: &dyn TileProvider) -> bool {
        self.is_not_found() && provider.ignore_not_found()
    }

    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            FetchError::TileNotFound { url }
            | FetchError::FetchFailed { url, .. }
            | FetchError::DecodeFailed { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{open_street_map, TemplateProvider};

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::FetchFailed {
            url: "http://a.example/1/2/3.png".to_string(),
            reason: "500 Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GET http://a.example/1/2/3.png: 500 Internal Server Error"
        );

        let err = FetchError::TileNotFound {
            url: "http://a.example/1/2/3.png".to_string(),
        };
        assert_eq!(err.to_string(), "Tile not found: http://a.example/1/2/3.png");
    }

    #[test]
    fn test_is_not_found() {
        let not_found = FetchError::TileNotFound {
            url: "u".to_string(),
        };
        let failed = FetchError::FetchFailed {
            url: "u".to_string(),
            reason: "r".to_string(),
        };
        assert!(not_found.is_not_found());
        assert!(!failed.is_not_found());
        assert_eq!(failed.url(), "u");
    }

    #[test]
    fn test_ignorable_depends_on_provider() {
        let not_found = FetchError::TileNotFound {
            url: "u".to_string(),
        };
        let strict = open_street_map();
        let lenient = TemplateProvider::new("lenient", "", "http://h/{z}/{x}/{y}", &[])
            .with_ignore_not_found(true);

        assert!(!not_found.is_ignorable_for(&strict));
        assert!(not_found.is_ignorable_for(&lenient));

        let decode = FetchError::DecodeFailed {
            url: "u".to_string(),
            reason: "bad".to_string(),
        };
        assert!(!decode.is_ignorable_for(&lenient));
    }
}
