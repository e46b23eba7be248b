//! HTTP transport over `hyper`.
//!
//! One `GET` per call, body collected in full and parsed as JSON. TLS via
//! rustls with the bundled webpki roots; plain `http://` is accepted too so
//! the adapter can be pointed at local test servers and mirrors.

use ensdict_core::{DictError, Transport, TransportError};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{ACCEPT, USER_AGENT};
use hyper::{Method, Request, Uri};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

const AGENT: &str = concat!("ensdict/", env!("CARGO_PKG_VERSION"));

/// Pooled HTTP/1 client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport").finish_non_exhaustive()
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HyperTransport {
    pub fn new() -> Self {
        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(https);
        Self { client }
    }
}

impl Transport for HyperTransport {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, DictError> {
        let uri: Uri = url.parse().map_err(|e: hyper::http::uri::InvalidUri| {
            TransportError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, AGENT)
            .body(Empty::<Bytes>::new())
            .map_err(|e| TransportError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let res = self
            .client
            .request(req)
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = res.status();
        let body = res
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?
            .to_bytes();

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }
            .into());
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
