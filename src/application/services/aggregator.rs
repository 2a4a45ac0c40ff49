//! Candidate link aggregation and deduplication.

use std::collections::HashSet;

/// Merges provider result lists into a single deduplicated candidate list.
///
/// Two links are the same candidate iff their URL strings are equal; no
/// normalization is applied. First-seen order is preserved so that downstream
/// filename indexing is stable across runs with identical inputs.
pub fn aggregate_links(lists: Vec<Vec<String>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for url in lists.into_iter().flatten() {
        if seen.insert(url.clone()) {
            candidates.push(url);
        }
    }

    candidates
}
