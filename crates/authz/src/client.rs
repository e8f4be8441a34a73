//! Client entry point and facade accessors

use std::sync::Arc;

use crate::api::{Groups, Permissions, Roles, Users};
use crate::cache::CacheStats;
use crate::config::AuthzConfig;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::token::AccessToken;

/// Typed client for the authorization-extension API
///
/// Owns the token, the response cache, and the HTTP connection pool as
/// explicit instance state; cloning is cheap and every clone shares all
/// three. Callers authenticate once, then reach the resource families
/// through the facade accessors.
///
/// # Examples
///
/// ```no_run
/// use auth0_authz::{AuthzClient, AuthzConfig};
///
/// # async fn example() -> auth0_authz::Result<()> {
/// let config = AuthzConfig::new(
///     "client-id",
///     "client-secret",
///     "https://tenant.auth0.com",
///     "https://tenant.us.webtask.io/api",
/// )?;
/// let client = AuthzClient::new(config)?;
/// client.authenticate().await?;
///
/// for group in client.groups().list().await? {
///     println!("{}: {}", group.id, group.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AuthzClient {
    dispatch: Arc<Dispatcher>,
}

impl AuthzClient {
    /// Build a client from its configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`](crate::Error::Network) when the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: AuthzConfig) -> Result<Self> {
        Ok(Self {
            dispatch: Arc::new(Dispatcher::new(config)?),
        })
    }

    /// Exchange client credentials for a bearer token
    ///
    /// Replaces any stored token wholesale. There is no automatic
    /// refresh; call this again once [`is_authenticated`](Self::is_authenticated)
    /// reports false.
    pub async fn authenticate(&self) -> Result<()> {
        self.dispatch.authenticate().await
    }

    /// True iff a token is present and unexpired at the moment of the call
    pub fn is_authenticated(&self) -> bool {
        self.dispatch.token().is_authenticated()
    }

    /// The stored bearer token, if any
    pub fn access_token(&self) -> Option<AccessToken> {
        self.dispatch.token().current()
    }

    /// Permission operations
    pub fn permissions(&self) -> Permissions<'_> {
        Permissions::new(&self.dispatch)
    }

    /// Role operations
    pub fn roles(&self) -> Roles<'_> {
        Roles::new(&self.dispatch)
    }

    /// Group operations
    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.dispatch)
    }

    /// User association operations
    pub fn users(&self) -> Users<'_> {
        Users::new(&self.dispatch)
    }

    /// Snapshot of the response-cache counters
    pub fn cache_stats(&self) -> CacheStats {
        self.dispatch.cache().stats()
    }
}
