//! Frequency ranking with a deterministic tie-break.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences and sorts by count descending.
///
/// Keys with equal counts keep the order in which they were first seen: the
/// counts are collected in first-seen order and then stably sorted.
pub(crate) fn rank<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
