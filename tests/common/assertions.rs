//! Domain-specific assertion macros for ensdict harnesses.
//!
//! These wrap `pretty_assertions` so a failing comparison shows a readable
//! diff of the term or id lists rather than two long `Debug` dumps.

/// Assert the `str` of every term, in order.
///
/// ```rust
/// assert_terms!(entry, ["AKT1", "RAC"]);
/// ```
#[macro_export]
macro_rules! assert_terms {
    ($item:expr, [$($term:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $item.terms.iter().map(|t| t.str.as_str()).collect();
        let expected: Vec<&str> = vec![$($term),*];
        pretty_assertions::assert_eq!(actual, expected, "terms of {}", $item.id);
    }};
}

/// Assert the ids of a result list, in order. Ids are given without the
/// `https://www.ensembl.org/id/` prefix.
///
/// ```rust
/// assert_local_ids!(res.items, ["G1", "G2"]);
/// ```
#[macro_export]
macro_rules! assert_local_ids {
    ($items:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<String> = $items.iter().map(|e| e.id.clone()).collect();
        let expected: Vec<String> = vec![$(format!("https://www.ensembl.org/id/{}", $id)),*];
        pretty_assertions::assert_eq!(actual, expected);
    }};
}
