//! `retry-json` fetches a URL with HTTP GET, parses the body as JSON and
//! retries every failure with exponential backoff.
//!
//! Failures never reach the caller. Non-`200` statuses, transport errors and
//! malformed bodies are logged through `tracing` and retried alike; when the
//! budget runs out the result is `None`.
//!
//! - [`fetch_json`] / [`fetch_json_with`]: one-shot blocking calls
//! - [`blocking::JsonFetcher`]: reusable blocking fetcher
//! - [`JsonFetcher`]: async fetcher for use inside a tokio runtime

mod attempt;
mod backoff;
mod client;
mod decode;
mod error;
mod options;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use attempt::{FailedAttempt, Notify};
pub use backoff::backoff_delay;
pub use client::JsonFetcher;
pub use error::FetchError;
pub use options::FetchOptions;

#[cfg(feature = "blocking")]
pub use blocking::{fetch_json, fetch_json_with};
