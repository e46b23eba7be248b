//! Fake EBI Search REST server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves the two endpoints the adapter talks to:
//! - `GET /ensembl_gene?query=...`: every stored record (search and listing)
//! - `GET /ensembl_gene/entry/{ids}`: stored records whose id is in `ids`,
//!   in storage order (not request order)
//!
//! Every request's path and query string is recorded so tests can assert on
//! the exact URLs the adapter produced.
//!
//! # Example
//!
//! ```rust,ignore
//! let api = FakeSearchApi::start().await.unwrap();
//! api.add_record(gene_record("ENSG1", "GENE1")).await;
//! let dict = http_dictionary(&api.base_url());
//! ```

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    /// Records in the `{"fields": {...}}` shape EBI Search returns.
    records: Vec<Value>,
    /// Path + query of every request served, in arrival order.
    requests: Vec<String>,
    /// When set, every request is answered with this status and body.
    failure: Option<(StatusCode, String)>,
    /// When set, every request is answered 200 with this verbatim body.
    raw_body: Option<String>,
}

/// Handle to the running fake search server.
pub struct FakeSearchApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSearchApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/ensembl_gene", get(search))
            .route("/ensembl_gene/entry/{ids}", get(lookup))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Service root for the adapter (e.g. `http://127.0.0.1:PORT/ensembl_gene`).
    pub fn base_url(&self) -> String {
        format!("http://{}/ensembl_gene", self.addr)
    }

    pub async fn add_record(&self, record: Value) {
        self.state.lock().await.records.push(record);
    }

    pub async fn fail_with(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.state.lock().await.failure = Some((status, body.to_string()));
    }

    pub async fn respond_raw(&self, body: &str) {
        self.state.lock().await.raw_body = Some(body.to_string());
    }

    /// Path + query of every request served so far.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn search(State(state): State<Arc<Mutex<ApiState>>>, uri: Uri) -> Response {
    let mut state = state.lock().await;
    if let Some(early) = record_and_check(&mut state, &uri) {
        return early;
    }
    axum::Json(envelope(state.records.clone())).into_response()
}

async fn lookup(
    Path(ids): Path<String>,
    State(state): State<Arc<Mutex<ApiState>>>,
    uri: Uri,
) -> Response {
    let mut state = state.lock().await;
    if let Some(early) = record_and_check(&mut state, &uri) {
        return early;
    }

    let wanted: Vec<&str> = ids.split(',').collect();
    let hits: Vec<Value> = state
        .records
        .iter()
        .filter(|r| {
            r["fields"]["id"][0]
                .as_str()
                .is_some_and(|id| wanted.contains(&id))
        })
        .cloned()
        .collect();
    axum::Json(envelope(hits)).into_response()
}

fn record_and_check(state: &mut ApiState, uri: &Uri) -> Option<Response> {
    let pq = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.push(pq);

    if let Some((status, body)) = &state.failure {
        return Some((*status, body.clone()).into_response());
    }
    if let Some(raw) = &state.raw_body {
        return Some((StatusCode::OK, raw.clone()).into_response());
    }
    None
}

fn envelope(entries: Vec<Value>) -> Value {
    json!({ "hitCount": entries.len(), "entries": entries })
}
