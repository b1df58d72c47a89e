use std::time::Duration;

/// Returns the wait after the `retries`-th failed attempt:
/// `backoff_factor * 2^retries` seconds.
///
/// `retries` is counted after the increment, so the first wait is already
/// `2 * backoff_factor`. A non-positive or NaN factor yields no wait; results
/// too large for a [`Duration`] saturate to [`Duration::MAX`].
pub fn backoff_delay(backoff_factor: f64, retries: usize) -> Duration {
    if backoff_factor.is_nan() || backoff_factor <= 0.0 {
        return Duration::ZERO;
    }

    let exp = i32::try_from(retries).unwrap_or(i32::MAX);
    let secs = backoff_factor * 2f64.powi(exp);
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
