/// Why a single fetch attempt failed.
///
/// These never reach the caller of `fetch_json`; they are logged and handed
/// to the notify hook before the next attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Any status other than `200 OK`, with the raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// The `200` body was not valid JSON or did not match the target type.
    #[error("decode error: {0}")]
    Decode(String),
}
