//! Small string helpers used while building URLs and term lists.

use std::collections::HashSet;

/// Remove exact duplicates, keeping the first occurrence of each string.
pub fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|s| {
            let s = s.as_ref();
            seen.insert(s.to_owned()).then(|| s.to_owned())
        })
        .collect()
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ~`.
///
/// Stricter than browser `encodeURIComponent`: `! ' ( ) *` are encoded too.
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// The text after the last `/`, or the whole string when there is none.
pub fn last_path_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or(s)
}

/// The integer at the start of `s`, after leading whitespace and an optional
/// sign. Trailing text is ignored: `"12abc"` is 12, `"abc"` is `None`.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
