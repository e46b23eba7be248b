//! Host-side post-processing shared by every dictionary source.

use crate::options::{QueryOptions, ZSpec};
use crate::types::{DictInfo, HasZ};

/// Apply the `z` directive to a result list.
///
/// Items whose `z` block becomes empty under key selection lose it entirely.
pub fn prune<T: HasZ>(mut items: Vec<T>, spec: &ZSpec) -> Vec<T> {
    match spec {
        ZSpec::All => {}
        ZSpec::Drop => {
            for item in &mut items {
                *item.z_mut() = None;
            }
        }
        ZSpec::Keys(keys) => {
            for item in &mut items {
                let z = item.z_mut();
                if let Some(map) = z {
                    map.retain(|k, _| keys.iter().any(|key| key == k));
                }
                if z.as_ref().is_some_and(|map| map.is_empty()) {
                    *z = None;
                }
            }
        }
    }
    items
}

/// Restrict a catalog to the dictionaries named in `options.filter.id`.
///
/// A missing or empty filter keeps the whole catalog.
pub fn filter_dict_infos(infos: Vec<DictInfo>, options: &QueryOptions) -> Vec<DictInfo> {
    match &options.filter.id {
        Some(ids) if !ids.is_empty() => infos
            .into_iter()
            .filter(|info| ids.iter().any(|id| *id == info.id))
            .collect(),
        _ => infos,
    }
}
