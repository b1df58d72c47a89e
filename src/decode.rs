use serde::de::DeserializeOwned;

use crate::FetchError;

/// Parses a `200 OK` body. Any JSON value is accepted when `T` is
/// `serde_json::Value`; a shape mismatch for typed targets is a decode error.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str::<T>(body).map_err(|err| FetchError::Decode(err.to_string()))
}
