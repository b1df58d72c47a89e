/// Configures retry budget, backoff and request timeout.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchOptions {
    /// Number of attempts made before giving up. `0` makes no request at all.
    pub max_retries: usize,
    /// Seconds multiplied by `2^retries` to get the wait after a failure.
    pub backoff_factor: f64,
    /// Per-request timeout in milliseconds. `None` keeps the transport default.
    pub timeout_ms: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 1.0,
            timeout_ms: None,
        }
    }
}

impl FetchOptions {
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}
