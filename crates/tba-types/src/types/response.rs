use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{codec::is_zero, errors::Error, Result};

/// Envelope every Bot API method replies with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub error_code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// Why an unsuccessful request failed, when automatic handling is possible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group moved to a supergroup with this id.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub migrate_to_chat_id: i64,
    /// Seconds to wait before repeating a flood-limited request.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub retry_after: i32,
}

impl<T> ApiResponse<T> {
    /// Flood-control wait requested by a failed call.
    pub fn retry_after(&self) -> Option<Duration> {
        self.parameters
            .as_ref()
            .and_then(|p| u64::try_from(p.retry_after).ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// The result of a successful call.
    ///
    /// A failed call becomes [`Error::MalformedPayload`] carrying only the API's error code
    /// and description as text. Callers that react to specific failures (flood control,
    /// chat migration) should inspect `error_code`, `parameters` or
    /// [`retry_after`](Self::retry_after) before consuming the response. `ok` with no
    /// result is malformed too.
    pub fn into_result(self) -> Result<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(Error::MalformedPayload(
                "response is ok but carries no result".to_string(),
            )),
            (false, _) => Err(Error::MalformedPayload(format!(
                "api error {}: {}",
                self.error_code, self.description
            ))),
        }
    }
}
