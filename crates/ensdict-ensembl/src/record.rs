//! EBI Search response schema.
//!
//! ```json
//! { "hitCount": 1,
//!   "entries": [ { "id": "ENSG…", "source": "ensembl_gene",
//!                  "fields": { "id": ["ENSG…"], "gene_name": ["AKT1"], … } } ] }
//! ```
//!
//! Every field value is a list of strings, possibly empty. Fields the service
//! leaves out deserialize as empty lists.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "hitCount")]
    pub hit_count: Option<u64>,
    #[serde(default)]
    pub entries: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub fields: RecordFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordFields {
    #[serde(default)]
    pub id: Vec<String>,
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub gene_name: Vec<String>,
    #[serde(default)]
    pub gene_synonym: Vec<String>,
    #[serde(default)]
    pub transcript_count: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
}
