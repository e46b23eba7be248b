//! ensdict-core: the dictionary host contract.
//!
//! Everything a dictionary source needs that is not specific to one external
//! service: loosely-typed query option parsing, the normalized result types,
//! the [`DictionarySource`] and [`Transport`] capabilities, the shared `z`
//! pruning helper, error types and layered configuration.
//!
//! # Architecture
//!
//! ```text
//! host ──► DictionarySource ──► Transport ──► external service
//!              │
//!              └──► prune / filter_dict_infos
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod prune;
pub mod source;
pub mod transport;
pub mod types;

pub use error::{DictError, TransportError};
pub use options::{Filter, QueryOptions, SortKey, ZSpec};
pub use prune::{filter_dict_infos, prune};
pub use source::DictionarySource;
pub use transport::Transport;
pub use types::{DictInfo, Entry, HasZ, Items, Match, MatchType, Term, ZMap};
