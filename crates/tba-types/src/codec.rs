//! JSON entry points for the schema types.
//!
//! Decoding goes through these helpers so failures come back classified as
//! [`Error::MalformedPayload`] or [`Error::UnrecognizedVariant`].

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::{errors::Error, Result};

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(classify)
}

pub fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(classify)
}

pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(classify)
}

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::Encode)
}

pub fn encode_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Error::Encode)
}

pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(Error::Encode)
}

fn classify(err: serde_json::Error) -> Error {
    let err = Error::from_decode(err);
    tracing::debug!(error = %err, "payload decode failed");
    err
}

/// `skip_serializing_if` predicate for optional fields that are omitted at their zero value.
pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Unix timestamp to UTC, `None` for 0 and out-of-range values.
pub fn unix_time(ts: i64) -> Option<DateTime<Utc>> {
    if ts == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(ts, 0)
}
