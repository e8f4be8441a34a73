//! Authenticated request dispatch with cache routing
//!
//! Every request carries the current bearer token and JSON encoding.
//! GETs consult the response cache before touching the network; mutating
//! verbs invalidate the cached path tree once the remote API confirms
//! success, so a failed mutation leaves the cache intact.

use std::time::Instant;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheKey, ResponseCache};
use crate::config::AuthzConfig;
use crate::error::{Error, Result};
use crate::token::TokenManager;

pub(crate) struct Dispatcher {
    http: reqwest::Client,
    config: AuthzConfig,
    token: TokenManager,
    cache: ResponseCache,
}

impl Dispatcher {
    pub fn new(config: AuthzConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let cache = ResponseCache::new(config.cache_lifespan, config.cache_enabled);
        Ok(Self {
            http,
            config,
            token: TokenManager::new(),
            cache,
        })
    }

    pub fn token(&self) -> &TokenManager {
        &self.token
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub async fn authenticate(&self) -> Result<()> {
        self.token.authenticate(&self.http, &self.config).await
    }

    /// Cache-aware GET
    ///
    /// A fresh cached payload short-circuits the network entirely; a miss
    /// fetches, stores the raw JSON, and decodes.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let key = CacheKey::new(path, query);
        if let Some(cached) = self.cache.lookup(&key, Instant::now()) {
            return decode(cached);
        }

        let mut request = self
            .http
            .get(self.config.request_url(path))
            .header(AUTHORIZATION, self.token.bearer()?);
        if !query.is_empty() {
            request = request.query(query);
        }
        debug!(method = "GET", path = %path, "dispatching request");

        let payload = read_json(request.send().await?).await?;
        self.cache.insert(key, payload.clone(), Instant::now());
        decode(payload)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.mutate(Method::POST, path, Some(body)).await.and_then(decode)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.mutate(Method::PUT, path, Some(body)).await.and_then(decode)
    }

    /// PATCH with a body; the extension API answers association PATCHes
    /// with 204, so there is nothing to decode
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.mutate(Method::PATCH, path, Some(body)).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.mutate::<Value>(Method::DELETE, path, None).await.map(|_| ())
    }

    /// DELETE carrying a JSON body (user-association removals)
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        self.mutate(Method::DELETE, path, Some(body)).await.map(|_| ())
    }

    /// Send a mutating request; on confirmed success invalidate the cached
    /// tree for `path` before handing the payload back
    async fn mutate<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let mut request = self
            .http
            .request(method.clone(), self.config.request_url(path))
            .header(AUTHORIZATION, self.token.bearer()?);
        if let Some(body) = body {
            request = request.json(body);
        }
        debug!(method = %method, path = %path, "dispatching request");

        let payload = read_json(request.send().await?).await?;
        self.cache.invalidate(path);
        Ok(payload)
    }
}

/// Check the status and parse the body; empty bodies (204 deletes) become
/// `Value::Null`
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Api { status, body });
    }
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| Error::Decode(e.to_string()))
}
