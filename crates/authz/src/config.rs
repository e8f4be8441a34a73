//! Construction-time configuration

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::cache::DEFAULT_CACHE_LIFESPAN;
use crate::error::{Error, Result};

/// Settings for an [`AuthzClient`](crate::AuthzClient)
///
/// Both URLs are validated at construction. The cache fields default to a
/// 10 second lifespan with caching enabled.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use auth0_authz::AuthzConfig;
///
/// let config = AuthzConfig::new(
///     "client-id",
///     "client-secret",
///     "https://tenant.auth0.com",
///     "https://tenant.us.webtask.io/api",
/// )
/// .unwrap()
/// .with_cache_lifespan(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct AuthzConfig {
    /// OAuth client id used for the credential exchange
    pub client_id: String,

    /// OAuth client secret; never printed by `Debug`
    pub client_secret: SecretString,

    /// Identity provider base URL (the token endpoint lives under it)
    pub auth_url: Url,

    /// Authorization-extension API base URL
    pub extension_url: Url,

    /// Freshness window for cached GET responses
    pub cache_lifespan: Duration,

    /// Response caching toggle; when off every GET goes to the network
    pub cache_enabled: bool,
}

impl AuthzConfig {
    /// Build a configuration with default cache settings
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when either URL does not parse.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_url: &str,
        extension_url: &str,
    ) -> Result<Self> {
        let auth_url =
            Url::parse(auth_url).map_err(|e| Error::Config(format!("invalid auth URL: {e}")))?;
        let extension_url = Url::parse(extension_url)
            .map_err(|e| Error::Config(format!("invalid extension URL: {e}")))?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            auth_url,
            extension_url,
            cache_lifespan: DEFAULT_CACHE_LIFESPAN,
            cache_enabled: true,
        })
    }

    /// Override the cache freshness window
    #[must_use]
    pub fn with_cache_lifespan(mut self, lifespan: Duration) -> Self {
        self.cache_lifespan = lifespan;
        self
    }

    /// Disable response caching entirely
    #[must_use]
    pub fn with_cache_disabled(mut self) -> Self {
        self.cache_enabled = false;
        self
    }

    /// Token endpoint under the identity provider base URL
    pub(crate) fn token_endpoint(&self) -> String {
        format!("{}/oauth/token", self.auth_url.as_str().trim_end_matches('/'))
    }

    /// Absolute request URL for an extension API path
    pub(crate) fn request_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            self.extension_url.as_str().trim_end_matches('/')
        )
    }
}
