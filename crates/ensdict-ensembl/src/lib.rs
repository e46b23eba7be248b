//! ensdict-ensembl: Ensembl genes as a dictionary source.
//!
//! Translates dictionary queries into EBI Search REST URLs for the
//! `ensembl_gene` domain and normalizes the multi-valued records it returns.
//!
//! # Architecture
//!
//! ```text
//! QueryOptions ──► url ──► Transport ──► record ──► mapper ──► postprocess ──► prune
//! ```
//!
//! Only [`dictionary`] performs I/O, and only through the injected
//! [`Transport`](ensdict_core::Transport). Everything else is pure.

pub mod dictionary;
pub mod mapper;
pub mod postprocess;
pub mod record;
pub mod strings;
pub mod transport;
pub mod url;

pub use dictionary::EnsemblDictionary;
pub use mapper::{build_terms, RecordMapper, ENSEMBL_DICT_ID};
pub use record::{Record, RecordFields, SearchResponse};
pub use transport::HyperTransport;
pub use url::{PageWindow, UrlBuilder, ENSEMBL_FIELDS, SEARCH_DOMAIN};
