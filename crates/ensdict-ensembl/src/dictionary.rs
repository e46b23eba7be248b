//! [`EnsemblDictionary`]: the [`DictionarySource`] over EBI Search.
//!
//! Each operation issues at most one request through the injected
//! [`Transport`] and keeps all per-call state local, so one instance can
//! serve any number of concurrent callers.

use ensdict_core::config::{Config, EnsemblConfig, LimitsConfig};
use ensdict_core::{
    filter_dict_infos, prune, DictError, DictInfo, DictionarySource, Entry, Items, Match,
    QueryOptions, Transport,
};

use crate::mapper::RecordMapper;
use crate::postprocess::{paginate_entries, sort_entries};
use crate::record::SearchResponse;
use crate::transport::HyperTransport;
use crate::url::UrlBuilder;

pub struct EnsemblDictionary<T = HyperTransport> {
    transport: T,
    urls: UrlBuilder,
    mapper: RecordMapper,
    log_urls: bool,
}

impl EnsemblDictionary<HyperTransport> {
    /// Adapter backed by the default HTTP transport.
    pub fn from_config(cfg: &Config) -> Self {
        Self::with_transport(HyperTransport::new(), &cfg.ensembl, cfg.limits)
    }
}

impl<T: Transport> EnsemblDictionary<T> {
    pub fn with_transport(transport: T, cfg: &EnsemblConfig, limits: LimitsConfig) -> Self {
        Self {
            transport,
            urls: UrlBuilder::new(cfg, limits),
            mapper: RecordMapper::new(cfg.optimap),
            log_urls: cfg.log,
        }
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    pub fn mapper(&self) -> &RecordMapper {
        &self.mapper
    }

    /// The single catalog record this source serves.
    pub fn dict_info(&self) -> DictInfo {
        DictInfo {
            id: self.mapper.dict_id().to_string(),
            abbrev: "Ensembl".to_string(),
            name: "Ensembl".to_string(),
        }
    }

    async fn search(&self, url: &str) -> Result<SearchResponse, DictError> {
        if self.log_urls {
            tracing::info!(%url, "ensembl request");
        } else {
            tracing::debug!(%url, "ensembl request");
        }

        let body = self.transport.fetch(url).await?;
        let res: SearchResponse = serde_json::from_value(body)?;
        tracing::debug!(records = res.entries.len(), hit_count = ?res.hit_count, "ensembl response parsed");
        Ok(res)
    }
}

impl<T: Transport> DictionarySource for EnsemblDictionary<T> {
    async fn get_dict_infos(&self, options: &QueryOptions) -> Result<Items<DictInfo>, DictError> {
        Ok(Items::new(filter_dict_infos(vec![self.dict_info()], options)))
    }

    async fn get_entries(&self, options: &QueryOptions) -> Result<Items<Entry>, DictError> {
        if options.excludes_dict(self.mapper.dict_id()) {
            tracing::debug!("dictID filter excludes ensembl, skipping request");
            return Ok(Items::empty());
        }

        let url = self.urls.entry_lookup_url(options);
        let res = self.search(&url).await?;
        let mut entries = self.mapper.map_to_entities(&res)?;

        if options.has_id_filter() {
            entries = paginate_entries(
                sort_entries(entries, options.sort),
                options,
                self.urls.limits().per_page_default,
            );
        }

        Ok(Items::new(prune(entries, &options.z)))
    }

    async fn get_entry_matches_for_string(
        &self,
        s: &str,
        options: &QueryOptions,
    ) -> Result<Items<Match>, DictError> {
        if s.trim().is_empty() {
            return Ok(Items::empty());
        }
        if options.excludes_dict(self.mapper.dict_id()) {
            tracing::debug!("dictID filter excludes ensembl, skipping request");
            return Ok(Items::empty());
        }

        let url = self.urls.match_search_url(s, options);
        let res = self.search(&url).await?;
        let matches = self.mapper.map_to_matches(&res, s)?;

        Ok(Items::new(prune(matches, &options.z)))
    }
}
