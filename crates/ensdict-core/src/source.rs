//! The capability every dictionary source implements.

use std::future::Future;

use crate::error::DictError;
use crate::options::QueryOptions;
use crate::types::{DictInfo, Entry, Items, Match};

/// A queryable dictionary: catalog description, entry lookup and string
/// matching. Each call resolves exactly once, with either items or an error.
pub trait DictionarySource: Send + Sync {
    /// Describe the dictionaries this source serves. Performs no I/O.
    fn get_dict_infos(
        &self,
        options: &QueryOptions,
    ) -> impl Future<Output = Result<Items<DictInfo>, DictError>> + Send;

    /// Fetch entries, either by `options.filter.id` or as a paginated listing.
    fn get_entries(
        &self,
        options: &QueryOptions,
    ) -> impl Future<Output = Result<Items<Entry>, DictError>> + Send;

    /// Fetch entries whose labels match a free-text string.
    fn get_entry_matches_for_string(
        &self,
        s: &str,
        options: &QueryOptions,
    ) -> impl Future<Output = Result<Items<Match>, DictError>> + Send;
}
