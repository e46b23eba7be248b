//! Normalized types returned by every dictionary source.
//!
//! These serialize to the wire shape hosts expect (`dictID`, `descr`, `z`, …),
//! so a CLI or server can hand them out with `serde_json` unchanged.

use serde::{Deserialize, Serialize};

/// Auxiliary per-item fields (`z`). Kept as an open JSON object because the
/// set of keys is source-specific and pruning selects them by name.
pub type ZMap = serde_json::Map<String, serde_json::Value>;

/// One label of an entry. The first term of an entry is its canonical label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub str: String,
}

impl Term {
    pub fn new(s: impl Into<String>) -> Self {
        Self { str: s.into() }
    }
}

/// A normalized dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    pub terms: Vec<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<ZMap>,
}

impl Entry {
    /// The canonical label, or `""` for an entry without terms.
    pub fn main_term(&self) -> &str {
        self.terms.first().map(|t| t.str.as_str()).unwrap_or("")
    }
}

/// How a match relates to the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// The canonical term starts with the query string.
    #[serde(rename = "S")]
    Prefix,
    /// Any other hit returned by the service.
    #[serde(rename = "T")]
    Other,
}

/// A normalized entry annotated for a free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    pub str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub terms: Vec<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<ZMap>,
}

/// Catalog record describing a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictInfo {
    pub id: String,
    pub abbrev: String,
    pub name: String,
}

/// `{ "items": [...] }` envelope every operation returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Anything that carries a prunable `z` block.
pub trait HasZ {
    fn z_mut(&mut self) -> &mut Option<ZMap>;
}

impl HasZ for Entry {
    fn z_mut(&mut self) -> &mut Option<ZMap> {
        &mut self.z
    }
}

impl HasZ for Match {
    fn z_mut(&mut self) -> &mut Option<ZMap> {
        &mut self.z
    }
}
