//! Pure tally arithmetic, usable as the step of a fold.

use std::collections::HashMap;

/// Return a fresh tally equal to `current` with `candidate_id` incremented by
/// one, inserting the id at 1 if it was absent. An empty id leaves the counts
/// unchanged (still a fresh copy). The input map is never mutated, so the
/// function is safe to chain in a reduce pipeline.
pub fn tally_pure(current: &HashMap<String, u64>, candidate_id: &str) -> HashMap<String, u64> {
    let mut next = current.clone();
    if candidate_id.is_empty() {
        return next;
    }

    *next.entry(candidate_id.to_string()).or_insert(0) += 1;
    next
}
