/// Error type for the schema layer.
///
/// Decode failures are split into structural problems and unknown variant shapes so
/// callers can decide whether a newer API shape should degrade or fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("unrecognized variant `{value}`: {detail}")]
    UnrecognizedVariant { value: String, detail: String },

    #[error("failed to retrieve file {file_id}: {source}")]
    Retrieval {
        file_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Prefix serde uses for `de::Error::unknown_variant`.
const UNKNOWN_VARIANT_PREFIX: &str = "unknown variant `";

impl Error {
    /// Classify a `serde_json` decode error.
    ///
    /// serde_json only carries a message for data errors, so unknown shapes are
    /// recognized by the message serde emits for `unknown_variant`.
    pub fn from_decode(err: serde_json::Error) -> Self {
        let detail = err.to_string();
        if let Some(rest) = detail.strip_prefix(UNKNOWN_VARIANT_PREFIX) {
            let value = rest.split('`').next().unwrap_or_default().to_string();
            return Error::UnrecognizedVariant { value, detail };
        }
        Error::MalformedPayload(detail)
    }

    pub fn retrieval(file_id: impl Into<String>, source: std::io::Error) -> Self {
        Error::Retrieval {
            file_id: file_id.into(),
            source,
        }
    }

    /// True when the payload used a shape this crate does not know yet.
    pub fn is_forward_compat(&self) -> bool {
        matches!(self, Error::UnrecognizedVariant { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(tag = "kind", rename_all = "snake_case")]
    #[allow(dead_code)]
    enum Sample {
        Alpha { n: i64 },
        Beta,
    }

    #[test]
    fn unknown_variant_is_classified() {
        let err = serde_json::from_str::<Sample>(r#"{"kind":"gamma"}"#).unwrap_err();
        match Error::from_decode(err) {
            Error::UnrecognizedVariant { value, detail } => {
                assert_eq!(value, "gamma");
                assert!(detail.contains("alpha"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_tag_and_missing_field_are_malformed() {
        let err = serde_json::from_str::<Sample>(r#"{"n":1}"#).unwrap_err();
        assert!(matches!(Error::from_decode(err), Error::MalformedPayload(_)));

        let err = serde_json::from_str::<Sample>(r#"{"kind":"alpha"}"#).unwrap_err();
        let err = Error::from_decode(err);
        assert!(matches!(err, Error::MalformedPayload(ref m) if m.contains("missing field `n`")));
        assert!(!err.is_forward_compat());
    }

    #[test]
    fn syntax_errors_are_malformed() {
        let err = serde_json::from_str::<Sample>("{not json").unwrap_err();
        assert!(matches!(Error::from_decode(err), Error::MalformedPayload(_)));
    }
}
