//! Google Static Maps provider.
//!
//! Uses the Maps Static API, which renders one image for a requested center,
//! zoom and size instead of serving a tile grid. Requires users to have their
//! own Google Cloud Platform account, authenticated either by API key or by a
//! premium-plan client id with a URL signature.
//!
//! # API Endpoint
//!
//! `https://maps.googleapis.com/maps/api/staticmap?key={KEY}&size={w}x{h}&center={lon},{lat}&zoom={z}&style=...`
//!
//! Parameters whose value is unset (zero or negative) are left out so the
//! service falls back to its own defaults.

use crate::provider::{Provider, ProviderError, StaticMapProvider};

/// Maps Static API endpoint, including the query separator.
const GOOGLE_STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap?";

/// Configuration for [`GoogleStaticProvider`].
///
/// # Example
///
/// ```
/// use mapfetch::provider::{GoogleStaticConfig, GoogleStaticProvider};
///
/// let config = GoogleStaticConfig::with_key("YOUR_API_KEY")
///     .style("feature:poi|visibility:off");
/// let provider = GoogleStaticProvider::new(config).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleStaticConfig {
    /// API key, sent as `key=`. Takes precedence over the client id.
    pub key: Option<String>,
    /// Premium plan client id, sent as `client-id=`.
    pub client_id: Option<String>,
    /// URL signature accompanying `client_id`.
    pub signature: Option<String>,
    /// Style rules, each sent as its own `style=` parameter in order.
    pub styles: Vec<String>,
}

impl GoogleStaticConfig {
    /// Config authenticated by API key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Config authenticated by client id and signature.
    pub fn with_client_id(client_id: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            signature: Some(signature.into()),
            ..Self::default()
        }
    }

    /// Append one style rule.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.styles.push(style.into());
        self
    }

    /// Append several style rules, keeping their order.
    pub fn styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.extend(styles.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Credentials {
    Key(String),
    ClientId { client_id: String, signature: String },
}

/// Google Maps Static API provider.
///
/// # Pricing
///
/// Google Maps Platform is a paid service. Check current pricing at:
/// https://cloud.google.com/maps-platform/pricing
#[derive(Debug, Clone)]
pub struct GoogleStaticProvider {
    credentials: Credentials,
    styles: Vec<String>,
}

impl GoogleStaticProvider {
    /// Creates a provider from `config`.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::MissingCredentials`] if neither key nor client id is set
    /// - [`ProviderError::MissingSignature`] if a client id has no signature
    pub fn new(config: GoogleStaticConfig) -> Result<Self, ProviderError> {
        let key = config.key.filter(|k| !k.is_empty());
        let client_id = config.client_id.filter(|c| !c.is_empty());

        let credentials = match (key, client_id) {
            (Some(key), _) => Credentials::Key(key),
            (None, Some(client_id)) => match config.signature.filter(|s| !s.is_empty()) {
                Some(signature) => Credentials::ClientId {
                    client_id,
                    signature,
                },
                None => return Err(ProviderError::MissingSignature(client_id)),
            },
            (None, None) => return Err(ProviderError::MissingCredentials),
        };

        Ok(Self {
            credentials,
            styles: config.styles,
        })
    }

    /// Configured style rules in request order.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }
}

impl Provider for GoogleStaticProvider {
    fn name(&self) -> &str {
        "google-map"
    }

    fn attribution(&self) -> &str {
        "Google Map (inc)"
    }
}

impl StaticMapProvider for GoogleStaticProvider {
    // The service caps width and height at 640, so the renderer is told to
    // work in moderate 256px pieces.
    fn tile_size(&self) -> u32 {
        256
    }

    fn static_url(&self, zoom: u8, lat: f64, lon: f64, width: u32, height: u32) -> String {
        let mut url = String::from(GOOGLE_STATIC_MAP_URL);

        match &self.credentials {
            Credentials::Key(key) => {
                url.push_str("key=");
                url.push_str(key);
            }
            Credentials::ClientId {
                client_id,
                signature,
            } => {
                url.push_str("client-id=");
                url.push_str(client_id);
                url.push_str("&signature=");
                url.push_str(signature);
            }
        }

        if width > 0 && height > 0 {
            url.push_str(&format!("&size={}x{}", width, height));
        }

        if lat > 0.0 && lon > 0.0 {
            url.push_str(&format!("&center={:.6},{:.6}", lon, lat));
        }

        if zoom > 0 {
            url.push_str(&format!("&zoom={}", zoom));
        }

        for style in &self.styles {
            url.push_str("&style=");
            url.push_str(style);
        }

        url
    }
}
