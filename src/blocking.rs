//! Synchronous fetcher built on `reqwest::blocking`.
//!
//! Every call blocks the current thread for the requests and for the backoff
//! sleeps. Do not call into this module from inside an async runtime; use
//! [`crate::JsonFetcher`] there instead.

use std::fmt;
use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    attempt::{self, FailedAttempt, Notify},
    backoff_delay,
    decode::decode_json,
    FetchError, FetchOptions,
};

/// Fetches `url` as JSON, retrying every failure with exponential backoff.
///
/// At most `max_retries` attempts are made; after the `n`-th failure the
/// thread sleeps `backoff_factor * 2^n` seconds. Returns `None` once the
/// budget is exhausted, and immediately (without any request) when
/// `max_retries` is `0`.
///
/// ```no_run
/// let data = retry_json::fetch_json("https://api.example.com/data", 3, 1.0);
/// if let Some(data) = data {
///     println!("{data}");
/// }
/// ```
pub fn fetch_json(url: &str, max_retries: usize, backoff_factor: f64) -> Option<Value> {
    let opts = FetchOptions::default()
        .max_retries(max_retries)
        .backoff_factor(backoff_factor);
    fetch_json_with(url, &opts)
}

/// [`fetch_json`] driven by a full [`FetchOptions`].
pub fn fetch_json_with(url: &str, opts: &FetchOptions) -> Option<Value> {
    JsonFetcher::new()
        .with_options(opts.clone())
        .fetch_json(url)
}

#[derive(Clone)]
/// Blocking counterpart of [`crate::JsonFetcher`].
///
/// Unlike a bare `reqwest::blocking::Client`, the default client has no
/// request timeout; only [`FetchOptions::timeout_ms`] bounds an attempt.
pub struct JsonFetcher {
    http: reqwest::blocking::Client,
    options: FetchOptions,
}

impl Default for JsonFetcher {
    fn default() -> Self {
        Self::with_client(untimed_client())
    }
}

impl fmt::Debug for JsonFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFetcher")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl JsonFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::blocking::Client) -> Self {
        Self {
            http,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, opts: FetchOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn fetch_json(&self, url: &str) -> Option<Value> {
        self.fetch_json_as(url)
    }

    pub fn fetch_json_as<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        self.fetch_json_notify(url, attempt::nop)
    }

    pub fn fetch_json_notify<T, N>(&self, url: &str, mut notify: N) -> Option<T>
    where
        T: DeserializeOwned,
        N: Notify,
    {
        let mut retries = 0usize;
        while retries < self.options.max_retries {
            let error = match self.attempt(url) {
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

            thread::sleep(next_delay);
        }

        attempt::record_exhausted(url);
        None
    }

    fn attempt<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let mut request = self.http.get(url);
        if let Some(timeout_ms) = self.options.timeout_ms {
            request = request.timeout(Duration::from_millis(timeout_ms));
        }

        let response = request.send().map_err(FetchError::Transport)?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(FetchError::Transport)?;
        decode_json(&body)
    }
}

fn untimed_client() -> reqwest::blocking::Client {
    // Fails only where `Client::new` would panic too: TLS backend init.
    reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .expect("reqwest blocking client must build")
}
