//! Error types shared by every dictionary source.
//!
//! Only failures of the outbound call or of the response body are errors.
//! Malformed query options never reach this module: they fall back to defaults
//! while being parsed (see [`crate::options`]).

/// Failure of the outbound HTTP exchange itself.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The service answered with a non-success status. `body` is the raw
    /// response text, which for EBI Search is usually a JSON error document.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, TLS or protocol failure before a full response arrived.
    #[error("request failed: {0}")]
    Network(String),

    /// The URL handed to the transport could not be turned into a request.
    #[error("invalid request URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Error returned by the [`DictionarySource`](crate::DictionarySource) operations.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not JSON, or not the JSON shape the source expects.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but lacks a value the normalized form cannot do without.
    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },
}

impl DictError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DictError::MalformedRecord {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_service_body() {
        let err = DictError::from(TransportError::Status {
            status: 400,
            body: r#"{"error":"bad query"}"#.to_string(),
        });
        assert_eq!(
            err.to_string(),
            r#"service returned HTTP 400: {"error":"bad query"}"#
        );
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DictError = serde_err.into();
        assert!(matches!(err, DictError::Parse(_)));
    }
}
