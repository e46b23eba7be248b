//! Record → entry / match normalization.
//!
//! A record's label fields overlap heavily (`gene_name` is usually also in
//! `name`, synonyms repeat each other), so terms are assembled by precedence
//! and de-duplicated here. Output order always follows input order.

use ensdict_core::{DictError, Entry, Match, MatchType, Term, ZMap};
use serde_json::Value;

use crate::record::{Record, SearchResponse};
use crate::strings::{dedup_preserving_order, leading_integer};

/// Dictionary identifier of Ensembl; also the prefix of every entry id.
pub const ENSEMBL_DICT_ID: &str = "https://www.ensembl.org";

/// Maps parsed search responses to normalized items.
#[derive(Debug, Clone)]
pub struct RecordMapper {
    dict_id: String,
    optimap: bool,
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RecordMapper {
    /// With `optimap`, `descr` is assembled from species, synonyms and the
    /// description instead of the description alone.
    pub fn new(optimap: bool) -> Self {
        Self {
            dict_id: ENSEMBL_DICT_ID.to_string(),
            optimap,
        }
    }

    pub fn dict_id(&self) -> &str {
        &self.dict_id
    }

    pub fn map_to_entities(&self, res: &SearchResponse) -> Result<Vec<Entry>, DictError> {
        res.entries.iter().map(|r| self.map_record(r)).collect()
    }

    pub fn map_to_matches(&self, res: &SearchResponse, query: &str) -> Result<Vec<Match>, DictError> {
        res.entries
            .iter()
            .map(|r| self.map_record(r).map(|e| into_match(e, query)))
            .collect()
    }

    fn map_record(&self, record: &Record) -> Result<Entry, DictError> {
        let f = &record.fields;

        let local_id = f
            .id
            .first()
            .ok_or_else(|| DictError::malformed("record without an `id` value"))?;

        let terms = build_terms(&f.name, &f.gene_name, &f.gene_synonym).ok_or_else(|| {
            DictError::malformed(format!(
                "record {local_id} has no gene_name, name or gene_synonym value"
            ))
        })?;

        let descr = if self.optimap {
            describe(&f.species, &terms, &f.description)
        } else {
            f.description.first().cloned()
        };

        let mut z = ZMap::new();
        if let Some(raw) = f.transcript_count.first() {
            match leading_integer(raw) {
                Some(n) => {
                    z.insert("transcriptCount".into(), Value::from(n));
                }
                None => {
                    tracing::warn!(id = %local_id, transcript_count = %raw, "non-numeric transcript_count dropped");
                }
            }
        }
        if let Some(species) = f.species.first() {
            z.insert("species".into(), Value::from(species.as_str()));
        }

        Ok(Entry {
            id: format!("{}/id/{}", self.dict_id, local_id),
            dict_id: self.dict_id.clone(),
            descr,
            terms,
            z: Some(z),
        })
    }
}

fn into_match(entry: Entry, query: &str) -> Match {
    let main = entry.main_term().to_string();
    let match_type = if main.starts_with(query) {
        MatchType::Prefix
    } else {
        MatchType::Other
    };
    Match {
        id: entry.id,
        dict_id: entry.dict_id,
        str: main,
        descr: entry.descr,
        match_type,
        terms: entry.terms,
        z: entry.z,
    }
}

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// The canonical label: gene name, else name, else the first synonym.
///
/// The synonym fallback covers records the service should not produce; `None`
/// means the record has no label at all.
pub fn main_term<'a>(name: &'a [String], gene: &'a [String], synonyms: &'a [String]) -> Option<&'a str> {
    gene.first()
        .or_else(|| name.first())
        .or_else(|| synonyms.first())
        .map(String::as_str)
}

/// Canonical term first, then every other distinct label in
/// gene name → name → synonym order.
pub fn build_terms(name: &[String], gene: &[String], synonyms: &[String]) -> Option<Vec<Term>> {
    let main = main_term(name, gene, synonyms)?;

    let rest = dedup_preserving_order(gene.iter().chain(name).chain(synonyms));

    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push(Term::new(main));
    terms.extend(rest.into_iter().filter(|s| s != main).map(Term::new));
    Some(terms)
}

/// `"{species}; {synonyms}; {description}"` with empty parts left out.
///
/// Synonyms are `terms[1..]` rotated left by one, so the first synonym (the
/// long-form name) comes last, joined with `|`.
pub fn describe(species: &[String], terms: &[Term], description: &[String]) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if let Some(s) = species.first() {
        parts.push(s.clone());
    }

    let mut synonyms: Vec<&str> = terms.iter().skip(1).map(|t| t.str.as_str()).collect();
    if !synonyms.is_empty() {
        synonyms.rotate_left(1);
        parts.push(synonyms.join("|"));
    }

    if let Some(d) = description.first() {
        parts.push(d.clone());
    }

    (!parts.is_empty()).then(|| parts.join("; "))
}
