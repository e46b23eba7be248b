//! Query options accepted by every dictionary operation.
//!
//! Options arrive as loosely-typed JSON from the host. Parsing never fails:
//! any field that is absent or has the wrong shape is recorded as "not
//! provided" and the operation uses its documented default instead.

use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Sort key
// ---------------------------------------------------------------------------

/// Recognized values of `options.sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    DictId,
    Str,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "dictID" => Ok(SortKey::DictId),
            "str" => Ok(SortKey::Str),
            other => Err(format!("unknown sort key: {other:?} (expected id, dictID or str)")),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Id => write!(f, "id"),
            SortKey::DictId => write!(f, "dictID"),
            SortKey::Str => write!(f, "str"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pruning directive
// ---------------------------------------------------------------------------

/// The `z` directive: which auxiliary fields survive pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ZSpec {
    /// Keep every `z` field (`z` absent or `true`).
    #[default]
    All,
    /// Remove `z` entirely.
    Drop,
    /// Keep only the named `z` fields.
    Keys(Vec<String>),
}

impl ZSpec {
    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Bool(true)) => ZSpec::All,
            Some(Value::String(key)) => ZSpec::Keys(vec![key.clone()]),
            Some(Value::Array(keys)) => {
                let keys: Vec<String> = keys
                    .iter()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect();
                if keys.is_empty() {
                    ZSpec::Drop
                } else {
                    ZSpec::Keys(keys)
                }
            }
            Some(_) => ZSpec::Drop,
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// `options.filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Requested entry identifiers, exactly as given (blanks included).
    pub id: Option<Vec<String>>,
    /// Requested dictionary identifiers.
    pub dict_id: Option<Vec<String>>,
}

/// Parsed query options.
///
/// Integers are stored as given; [`page`](Self::page) and
/// [`per_page`](Self::per_page) apply the `>= 1` validity rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct QueryOptions {
    pub filter: Filter,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<SortKey>,
    pub z: ZSpec,
}

impl From<Value> for QueryOptions {
    fn from(value: Value) -> Self {
        Self::from_json(&value)
    }
}

impl QueryOptions {
    /// Parse options from an arbitrary JSON value. Non-objects yield defaults.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let filter = obj
            .get("filter")
            .and_then(Value::as_object)
            .map(|f| Filter {
                id: f.get("id").and_then(string_list),
                dict_id: f.get("dictID").and_then(string_list),
            })
            .unwrap_or_default();

        Self {
            filter,
            page: obj.get("page").and_then(integer),
            per_page: obj.get("perPage").and_then(integer),
            sort: obj
                .get("sort")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok()),
            z: ZSpec::from_json(obj.get("z")),
        }
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.id = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_dict_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.dict_id = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_z(mut self, z: ZSpec) -> Self {
        self.z = z;
        self
    }

    /// The 1-based page number, if one was given and is at least 1.
    pub fn page(&self) -> Option<u64> {
        positive(self.page)
    }

    /// The page size, if one was given and is at least 1.
    pub fn per_page(&self) -> Option<u64> {
        positive(self.per_page)
    }

    /// Identifiers from `filter.id` with blank entries removed.
    pub fn usable_ids(&self) -> Vec<&str> {
        self.filter
            .id
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|id| !id.trim().is_empty())
            .collect()
    }

    /// Whether the request names at least one non-blank identifier.
    pub fn has_id_filter(&self) -> bool {
        !self.usable_ids().is_empty()
    }

    /// `true` when `filter.dictID` is a non-empty list that leaves `dict_id` out.
    pub fn excludes_dict(&self, dict_id: &str) -> bool {
        match &self.filter.dict_id {
            Some(ids) if !ids.is_empty() => !ids.iter().any(|id| id == dict_id),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn positive(n: Option<i64>) -> Option<u64> {
    n.filter(|n| *n >= 1).map(|n| n as u64)
}

/// Integer-valued JSON numbers only; `2.0` counts, `2.5` and `"2"` do not.
fn integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    })
}
