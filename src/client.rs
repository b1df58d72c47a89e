use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    attempt::{self, FailedAttempt, Notify},
    backoff_delay,
    decode::decode_json,
    FetchError, FetchOptions,
};

#[derive(Clone, Default)]
/// Async JSON fetcher that retries every failed attempt.
///
/// Each call runs attempts strictly one after another, sleeping
/// `backoff_factor * 2^retries` seconds after each failure. No failure is
/// ever returned: once [`FetchOptions::max_retries`] attempts have failed the
/// call resolves to `None`.
pub struct JsonFetcher {
    http: reqwest::Client,
    options: FetchOptions,
}

impl fmt::Debug for JsonFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFetcher")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl JsonFetcher {
    /// Creates a fetcher with a fresh `reqwest::Client` and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher on top of an existing client, e.g. one with a proxy
    /// or custom TLS roots.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            options: FetchOptions::default(),
        }
    }

    /// Applies retry, backoff and timeout options.
    pub fn with_options(mut self, opts: FetchOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches `url` and returns its body as a JSON value.
    pub async fn fetch_json(&self, url: &str) -> Option<Value> {
        self.fetch_json_as(url).await
    }

    /// Fetches `url` and deserializes its body into `T`.
    ///
    /// A body that is valid JSON but does not match `T` counts as a failed
    /// attempt and is retried.
    pub async fn fetch_json_as<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        self.fetch_json_notify(url, attempt::nop).await
    }

    /// Like [`JsonFetcher::fetch_json_as`], calling `notify` for every failed
    /// attempt before sleeping.
    pub async fn fetch_json_notify<T, N>(&self, url: &str, mut notify: N) -> Option<T>
    where
        T: DeserializeOwned,
        N: Notify,
    {
        let mut retries = 0usize;
        while retries < self.options.max_retries {
            let error = match self.attempt(url).await {
                Ok(value) => return Some(value),
                Err(err) => err,
            };

            retries += 1;
            let next_delay = backoff_delay(self.options.backoff_factor, retries);
            let failed = FailedAttempt {
                url,
                attempt_number: retries - 1,
                error,
                next_delay,
            };
            attempt::record_failure(&failed, &mut notify);

            sleep(next_delay).await;
        }

        attempt::record_exhausted(url);
        None
    }

    async fn attempt<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let mut request = self.http.get(url);
        if let Some(timeout_ms) = self.options.timeout_ms {
            request = request.timeout(Duration::from_millis(timeout_ms));
        }

        let response = request.send().await.map_err(FetchError::Transport)?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        decode_json(&body)
    }
}
