use std::time::Duration;

use crate::FetchError;

/// One failed pass through the retry loop.
#[derive(Debug)]
pub struct FailedAttempt<'a> {
    /// URL being fetched; the same for every attempt of a call.
    pub url: &'a str,
    /// Zero-based index of the attempt that failed.
    pub attempt_number: usize,
    /// Why the attempt failed.
    pub error: FetchError,
    /// How long the fetcher sleeps before the next attempt.
    pub next_delay: Duration,
}

/// Observer for failed attempts, called before each backoff sleep.
pub trait Notify {
    fn notify(&mut self, attempt: &FailedAttempt<'_>);
}

impl<F> Notify for F
where
    F: FnMut(&FailedAttempt<'_>),
{
    fn notify(&mut self, attempt: &FailedAttempt<'_>) {
        self(attempt)
    }
}

pub(crate) fn nop(_: &FailedAttempt<'_>) {}

/// Logs the failure and hands it to `notify`.
pub(crate) fn record_failure<N: Notify>(attempt: &FailedAttempt<'_>, notify: &mut N) {
    let url = attempt.url;
    match &attempt.error {
        FetchError::Http { status, .. } => {
            tracing::warn!("received status code {status} for URL {url}");
        }
        FetchError::Transport(err) => {
            tracing::warn!("request failed for URL {url}. Error: {err}");
        }
        FetchError::Decode(err) => {
            tracing::warn!("received invalid JSON data for URL {url}: {err}");
        }
    }

    notify.notify(attempt);

    tracing::debug!("retrying {url} after {:?}", attempt.next_delay);
}

pub(crate) fn record_exhausted(url: &str) {
    tracing::error!("all retries failed for URL {url}");
}
