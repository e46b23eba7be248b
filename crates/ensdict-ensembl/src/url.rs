//! URL construction for the two EBI Search endpoints.
//!
//! The batch entry endpoint (`/entry/{ids}`) and the search endpoint
//! (`?query=...`) have disjoint parameter grammars, so each gets its own
//! builder method. Pagination parameters only exist on the search endpoint.

use ensdict_core::config::{EnsemblConfig, LimitsConfig};
use ensdict_core::QueryOptions;

use crate::strings::{encode_component, last_path_segment};

/// Fields requested for every record.
pub const ENSEMBL_FIELDS: &str =
    "id,name,description,gene_name,gene_synonym,transcript_count,species";

/// EBI Search domain holding Ensembl genes.
pub const SEARCH_DOMAIN: &str = "ensembl_gene";

// ---------------------------------------------------------------------------
// Pagination window
// ---------------------------------------------------------------------------

/// Service-side `size` / `start` derived from `page` and `perPage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub size: u64,
    pub start: u64,
}

impl PageWindow {
    /// `perPage` is honoured only up to the service ceiling; `start` is
    /// clamped to `max_start - 1`.
    pub fn resolve(options: &QueryOptions, limits: &LimitsConfig) -> Self {
        let size = options
            .per_page()
            .filter(|n| *n <= limits.max_page_size)
            .unwrap_or(limits.per_page_default);

        let start = match options.page() {
            Some(page) => {
                let offset = (page - 1).saturating_mul(size);
                if offset < limits.max_start {
                    offset
                } else {
                    limits.max_start.saturating_sub(1)
                }
            }
            None => limits.min_start,
        };

        Self { size, start }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds request URLs from query options. Immutable after construction.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    entries_root: String,
    matches_root: String,
    format: String,
    fields: String,
    limits: LimitsConfig,
}

impl UrlBuilder {
    pub fn new(cfg: &EnsemblConfig, limits: LimitsConfig) -> Self {
        Self {
            entries_root: cfg.entries_root().trim_end_matches('/').to_string(),
            matches_root: cfg.matches_root().trim_end_matches('/').to_string(),
            format: cfg.format.clone(),
            fields: encode_component(ENSEMBL_FIELDS),
            limits,
        }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Batch lookup when `filter.id` names anything non-blank, otherwise a
    /// paginated listing of the whole domain sorted by `id`.
    pub fn entry_lookup_url(&self, options: &QueryOptions) -> String {
        let ids = options.usable_ids();

        if !ids.is_empty() {
            let ids: Vec<String> = ids
                .into_iter()
                .map(|id| encode_component(last_path_segment(id)))
                .collect();
            return format!(
                "{}/entry/{}?fields={}&format={}",
                self.entries_root,
                ids.join(","),
                self.fields,
                self.format
            );
        }

        let window = PageWindow::resolve(options, &self.limits);
        format!(
            "{}?query=domain_source:{}&fields={}&sort=id&size={}&start={}&format={}",
            self.entries_root, SEARCH_DOMAIN, self.fields, window.size, window.start, self.format
        )
    }

    /// Free-text search; never takes the batch path.
    pub fn match_search_url(&self, query: &str, options: &QueryOptions) -> String {
        let window = PageWindow::resolve(options, &self.limits);
        format!(
            "{}?query={}&fields={}&size={}&start={}&format={}",
            self.matches_root,
            encode_component(query),
            self.fields,
            window.size,
            window.start,
            self.format
        )
    }
}
