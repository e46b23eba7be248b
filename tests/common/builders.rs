//! Test builders: fluent constructors for EBI Search records and adapters.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use ensdict_core::config::{EnsemblConfig, LimitsConfig};
use ensdict_ensembl::{EnsemblDictionary, HyperTransport};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one EBI Search record (`{"fields": {...}}`).
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("ENSG00000141510")
///     .gene_name("TP53")
///     .name("ENSG00000141510 (HGNC: TP53)")
///     .synonyms(["P53", "LFS1"])
///     .species("Homo sapiens")
///     .build();
/// ```
pub struct RecordBuilder {
    id: String,
    name: Vec<String>,
    description: Vec<String>,
    gene_name: Vec<String>,
    gene_synonym: Vec<String>,
    transcript_count: Vec<String>,
    species: Vec<String>,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: vec![],
            description: vec![],
            gene_name: vec![],
            gene_synonym: vec![],
            transcript_count: vec![],
            species: vec![],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name.push(name.into());
        self
    }

    pub fn gene_name(mut self, gene: impl Into<String>) -> Self {
        self.gene_name.push(gene.into());
        self
    }

    pub fn synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gene_synonym.extend(synonyms.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.push(description.into());
        self
    }

    pub fn transcripts(mut self, count: u32) -> Self {
        self.transcript_count.push(count.to_string());
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species.push(species.into());
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "source": "ensembl_gene",
            "fields": {
                "id": [self.id],
                "name": self.name,
                "description": self.description,
                "gene_name": self.gene_name,
                "gene_synonym": self.gene_synonym,
                "transcript_count": self.transcript_count,
                "species": self.species,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A record labelled by gene name only.
pub fn gene_record(id: &str, gene: &str) -> Value {
    RecordBuilder::new(id).gene_name(gene).build()
}

/// Adapter over the real HTTP transport, pointed at `base_url`.
pub fn http_dictionary(base_url: &str) -> EnsemblDictionary<HyperTransport> {
    EnsemblDictionary::with_transport(
        HyperTransport::new(),
        &EnsemblConfig::with_base_url(base_url),
        LimitsConfig::default(),
    )
}
