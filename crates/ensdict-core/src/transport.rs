//! Outbound fetch capability injected into dictionary sources.

use std::future::Future;

use crate::error::DictError;

/// Fetch a URL and return its body parsed as JSON.
///
/// Implementations map non-success statuses and connection failures to
/// [`TransportError`](crate::TransportError) and undecodable bodies to
/// [`DictError::Parse`]. No retries.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<serde_json::Value, DictError>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<serde_json::Value, DictError>> + Send {
        (**self).fetch(url)
    }
}
