//! Typed client for the Auth0 Authorization Extension API
//!
//! Wraps the extension's REST surface (permissions, roles, groups and
//! user associations) behind typed methods, adding bearer-token
//! authentication via the OAuth2 client-credentials grant and a
//! short-lived response cache with path-tree invalidation.
//!
//! # Features
//!
//! - **Typed resource facades** - one method group per entity family
//! - **Bearer-token lifecycle** - explicit `authenticate`, precise
//!   `is_authenticated` at call time, no hidden refresh
//! - **Response caching** - GETs served from a 10 second cache; any
//!   mutation stales the whole related path tree
//! - **Secure secrets** - client secret and token value never reach
//!   `Debug` output
//!
//! # Example
//!
//! ```no_run
//! use auth0_authz::{AuthzClient, AuthzConfig};
//!
//! # async fn example() -> auth0_authz::Result<()> {
//! let config = AuthzConfig::new(
//!     "client-id",
//!     "client-secret",
//!     "https://tenant.auth0.com",
//!     "https://tenant.us.webtask.io/adf6e2f2b84784b57522e3b19dfc9201/api",
//! )?;
//! let client = AuthzClient::new(config)?;
//! client.authenticate().await?;
//!
//! let roles = client.roles().list().await?;
//! client.users().add_role("auth0|user", &roles[0].id).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![forbid(unsafe_code)]

/// Resource facades: one method group per entity family
pub mod api;
mod cache;
mod client;
/// Construction-time configuration
pub mod config;
mod dispatch;
/// Error types and `Result` alias
pub mod error;
mod token;
/// Wire types for the extension's resources
pub mod types;

pub use crate::cache::CacheStats;
pub use crate::client::AuthzClient;
pub use crate::config::AuthzConfig;
pub use crate::error::{Error, Result};
pub use crate::token::AccessToken;

/// Commonly used types
pub mod prelude {
    pub use crate::api::{Groups, Permissions, Roles, Users};
    pub use crate::client::AuthzClient;
    pub use crate::config::AuthzConfig;
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        ExpandedGroup, Group, NewGroup, NewPermission, NewRole, Permission, Role, ShortPermission,
        ShortRole,
    };
}
