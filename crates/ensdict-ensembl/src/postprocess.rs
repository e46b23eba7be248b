//! Local sort and pagination for identifier lookups.
//!
//! The batch entry endpoint returns records in no particular order and
//! without pagination, so results of an identifier-filtered request are
//! ordered and sliced here. Listings from the search endpoint arrive already
//! sorted and paged and must not pass through this module.

use std::cmp::Ordering;

use ensdict_core::{Entry, QueryOptions, SortKey};

/// Order entries by the requested key.
///
/// `id`, `dictID`, and any unrecognized or absent key order by `id`; `str`
/// orders by canonical term and then by `id`. Comparisons ignore case and the
/// sort is stable.
pub fn sort_entries(mut entries: Vec<Entry>, sort: Option<SortKey>) -> Vec<Entry> {
    match sort {
        Some(SortKey::Str) => entries.sort_by(|a, b| {
            cmp_ignore_case(a.main_term(), b.main_term()).then_with(|| cmp_ignore_case(&a.id, &b.id))
        }),
        Some(SortKey::Id) | Some(SortKey::DictId) | None => {
            entries.sort_by(|a, b| cmp_ignore_case(&a.id, &b.id))
        }
    }
    entries
}

/// Keep the `[(page-1)*perPage, page*perPage)` slice.
///
/// Invalid or missing `page` means 1; invalid or missing `perPage` means
/// `per_page_default`. Pages past the end are empty.
pub fn paginate_entries(entries: Vec<Entry>, options: &QueryOptions, per_page_default: u64) -> Vec<Entry> {
    let page = options.page().unwrap_or(1);
    let per_page = options.per_page().unwrap_or(per_page_default);

    let start = (page - 1).saturating_mul(per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let take = usize::try_from(per_page).unwrap_or(usize::MAX);

    entries.into_iter().skip(start).take(take).collect()
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
