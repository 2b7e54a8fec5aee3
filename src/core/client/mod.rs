//! Public client surface + builder.
//! Internals are split into `retry` (policy + backoff) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::{EsgError, net};
use constants::{DEFAULT_BASE_API, DEFAULT_BUCKET, DEFAULT_STORAGE_URL, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use url::Url;

/// Handle to the dashboard backend and its image bucket.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EsgClient {
    http: Client,
    base_api: Url,
    storage_url: Url,
    storage_bucket: String,
    bearer_token: Option<String>,
    retry: RetryConfig,
}

impl Default for EsgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EsgClient {
    /// Create a new builder.
    pub fn builder() -> EsgClientBuilder {
        EsgClientBuilder::default()
    }

    /// The configured API root.
    pub fn base_api(&self) -> &Url {
        &self.base_api
    }

    /// The default retry policy applied to GET requests.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn storage_url(&self) -> &Url {
        &self.storage_url
    }

    pub(crate) fn storage_bucket(&self) -> &str {
        &self.storage_bucket
    }

    /// Appends `segments` to `base`, percent-encoding each one.
    pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, EsgError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| EsgError::Data(format!("base URL cannot hold a path: {base}")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url, EsgError> {
        Self::join_segments(&self.base_api, segments)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.authorized(self.http.get(url))
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.authorized(self.http.post(url))
    }

    pub(crate) fn put(&self, url: Url) -> RequestBuilder {
        self.authorized(self.http.put(url))
    }

    /// Sends a GET, retrying according to the active policy, and maps non-2xx statuses to errors.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, EsgError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        if !cfg.enabled {
            return self.send_once(req).await;
        }

        let mut attempt = 0u32;
        loop {
            let this = req
                .try_clone()
                .ok_or_else(|| EsgError::Data("request body cannot be replayed".into()))?;
            match this.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.retry_on_status.contains(&code) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(status = code, attempt, "retrying request");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return net::ensure_success(resp).await;
                }
                Err(e) => {
                    let retryable = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if attempt < cfg.max_retries && retryable {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(error = %e, attempt, "retrying request");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Sends a request exactly once. Used for writes, which are never replayed.
    pub(crate) async fn send_once(&self, req: RequestBuilder) -> Result<Response, EsgError> {
        let resp = req.send().await?;
        net::ensure_success(resp).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EsgClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    storage_url: Option<Url>,
    storage_bucket: Option<String>,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl EsgClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API root (e.g., `https://esg.example.com/api/`).
    #[must_use]
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Override the object storage root (e.g., `https://project.supabase.co/storage/v1/`).
    #[must_use]
    pub fn storage_url(mut self, url: Url) -> Self {
        self.storage_url = Some(url);
        self
    }

    /// Bucket that receives uploaded images.
    #[must_use]
    pub fn storage_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.storage_bucket = Some(bucket.into());
        self
    }

    /// Session token sent as `Authorization: Bearer <token>` on every request.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Turn retries of GET requests on or off without touching the rest of the policy.
    #[must_use]
    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).enabled = enabled;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<EsgClient, EsgError> {
        let base_api = match self.base_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_API)?,
        };
        let storage_url = match self.storage_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_STORAGE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EsgClient {
            http,
            base_api,
            storage_url,
            storage_bucket: self
                .storage_bucket
                .unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            bearer_token: self.bearer_token,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
