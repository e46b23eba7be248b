//! Recorded EBI Search responses used across harnesses.
//!
//! `ID_RESPONSE` is a batch lookup of ENSG00000142208 (AKT1);
//! `MELANOMA_RESPONSE` is a free-text search for "melanoma" cut to one hit.

use ensdict_ensembl::SearchResponse;
use serde_json::Value;

pub const ID_RESPONSE: &str = include_str!("../fixtures/id.json");
pub const MELANOMA_RESPONSE: &str = include_str!("../fixtures/melanoma.json");

pub fn id_response() -> SearchResponse {
    serde_json::from_str(ID_RESPONSE).expect("id.json fixture must parse")
}

pub fn melanoma_response() -> SearchResponse {
    serde_json::from_str(MELANOMA_RESPONSE).expect("melanoma.json fixture must parse")
}

/// The single record inside a fixture, for seeding the fake server.
pub fn first_record(fixture: &str) -> Value {
    let v: Value = serde_json::from_str(fixture).expect("fixture must be JSON");
    v["entries"][0].clone()
}

/// Field list every adapter URL carries, already percent-encoded.
pub const FIELDS_PARAM: &str =
    "fields=id%2Cname%2Cdescription%2Cgene_name%2Cgene_synonym%2Ctranscript_count%2Cspecies";
