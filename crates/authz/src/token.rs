//! Bearer-token lifecycle: credential exchange and validity checks

use std::time::{Duration, Instant};

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::config::AuthzConfig;
use crate::error::{Error, Result};

/// Fixed audience required by the authorization-extension token grant
const AUDIENCE: &str = "urn:auth0-authz-api";

/// Fallback lifetime when the provider omits `expires_in`
const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Maximum length of an error response body carried into logs
const MAX_ERROR_BODY_LOG_LENGTH: usize = 500;

/// Truncate a response body and redact token-bearing fields before logging
fn sanitize_response_for_logging(body: &str) -> String {
    let truncated = if body.len() > MAX_ERROR_BODY_LOG_LENGTH {
        format!(
            "{}... [truncated, {} total bytes]",
            &body[..MAX_ERROR_BODY_LOG_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };

    if let Ok(mut json) = serde_json::from_str::<serde_json::Value>(&truncated) {
        for field in ["access_token", "refresh_token", "id_token", "token", "secret"] {
            if json.get(field).is_some() {
                json[field] = serde_json::json!("[REDACTED]");
            }
        }
        json.to_string()
    } else {
        truncated
    }
}

/// Token response from the identity provider's `/oauth/token` endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Bearer credential with its recorded expiry
///
/// Replaced wholesale on every successful exchange, never partially
/// mutated. The raw value is only reachable through the `Authorization`
/// header; `Debug` redacts it.
#[derive(Clone)]
pub struct AccessToken {
    value: SecretString,
    expires_at: Instant,
}

impl AccessToken {
    pub(crate) fn new(value: String, expires_at: Instant) -> Self {
        Self {
            value: SecretString::from(value),
            expires_at,
        }
    }

    /// When the token stops being accepted
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Validity at an explicit instant
    pub fn is_valid_at(&self, now: Instant) -> bool {
        self.expires_at > now
    }

    /// Validity at the moment of the call
    pub fn is_expired(&self) -> bool {
        !self.is_valid_at(Instant::now())
    }

    /// `Authorization` header value
    pub(crate) fn header_value(&self) -> String {
        format!("Bearer {}", self.value.expose_secret())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Holds the current bearer token and refreshes it via credential exchange
///
/// There is no refresh-before-expiry: callers re-invoke
/// [`authenticate`](TokenManager::authenticate) themselves, and requests
/// carrying an expired token are rejected by the remote API rather than
/// intercepted here.
pub(crate) struct TokenManager {
    current: RwLock<Option<AccessToken>>,
}

impl TokenManager {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Exchange client credentials for a fresh token, replacing any stored one
    ///
    /// # Errors
    ///
    /// [`Error::Network`] when the token endpoint is unreachable;
    /// [`Error::AuthenticationFailed`] when it rejects the credentials or
    /// returns a body that does not parse.
    pub async fn authenticate(&self, http: &reqwest::Client, config: &AuthzConfig) -> Result<()> {
        let endpoint = config.token_endpoint();
        debug!(
            client_id = %config.client_id,
            endpoint = %endpoint,
            "exchanging client credentials for access token"
        );

        let response = http
            .post(&endpoint)
            .form(&[
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.expose_secret()),
                ("audience", AUDIENCE),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %sanitize_response_for_logging(&body),
                "token request rejected"
            );
            return Err(Error::AuthenticationFailed {
                reason: format!("HTTP {status}"),
            });
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                error = %e,
                body = %sanitize_response_for_logging(&body),
                "token response did not parse"
            );
            Error::AuthenticationFailed {
                reason: format!("malformed token response: {e}"),
            }
        })?;

        let expires_in = Duration::from_secs(token.expires_in.unwrap_or(DEFAULT_EXPIRES_IN));
        *self.current.write() = Some(AccessToken::new(
            token.access_token,
            Instant::now() + expires_in,
        ));
        info!("client credentials exchange completed");
        Ok(())
    }

    /// True iff a token is present and unexpired at the moment of the call
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .as_ref()
            .is_some_and(|token| !token.is_expired())
    }

    /// The stored token, if any
    pub fn current(&self) -> Option<AccessToken> {
        self.current.read().clone()
    }

    /// `Authorization` header value for the stored token
    ///
    /// An expired token is still returned; the remote API is the authority
    /// that rejects it. Only a never-authenticated manager errors locally.
    pub fn bearer(&self) -> Result<String> {
        self.current
            .read()
            .as_ref()
            .map(AccessToken::header_value)
            .ok_or(Error::NotAuthenticated)
    }
}
